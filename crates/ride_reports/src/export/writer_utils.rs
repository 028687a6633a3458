use std::fs::File;
use std::path::Path;

pub(crate) fn ensure_not_empty<T>(items: &[T]) -> Result<(), Box<dyn std::error::Error>> {
    if items.is_empty() {
        return Err("Nothing to export".into());
    }
    Ok(())
}

pub(crate) fn create_output_file(
    path: impl AsRef<Path>,
) -> Result<File, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}
