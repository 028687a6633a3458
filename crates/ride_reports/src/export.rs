//! CSV and JSON export of rides and ledger reports.

use std::path::{Path, PathBuf};

use ride_core::ledger::Ledger;
use ride_core::record::RideRecord;
use tracing::info;

use crate::metrics::{DriverSummary, LedgerReport};

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export rides to CSV, one row per ride in the given order.
///
/// # Errors
///
/// Returns an error if `rides` is empty, or if file creation or CSV writing fails.
pub fn export_rides_to_csv(
    rides: &[RideRecord],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(rides)?;
    let file = writer_utils::create_output_file(&path)?;
    csv::export_rides_to_csv_impl(rides, file)?;
    info!(rows = rides.len(), path = %path.as_ref().display(), "rides exported to CSV");
    Ok(())
}

/// Export rides as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if `rides` is empty, or if file creation or serialization fails.
pub fn export_rides_to_json(
    rides: &[RideRecord],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(rides)?;
    let file = writer_utils::create_output_file(&path)?;
    json::write_json_impl(rides, file)?;
    info!(rows = rides.len(), path = %path.as_ref().display(), "rides exported to JSON");
    Ok(())
}

/// Export per-driver summaries to CSV.
///
/// # Errors
///
/// Returns an error if `summaries` is empty, or if file creation or CSV writing fails.
pub fn export_driver_summaries_to_csv(
    summaries: &[DriverSummary],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(summaries)?;
    let file = writer_utils::create_output_file(&path)?;
    csv::export_driver_summaries_to_csv_impl(summaries, file)?;
    info!(rows = summaries.len(), path = %path.as_ref().display(), "driver summaries exported to CSV");
    Ok(())
}

/// Export a full [`LedgerReport`] as JSON. An empty ledger still produces a report.
pub fn export_report_to_json(
    report: &LedgerReport,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(&path)?;
    json::write_json_impl(report, file)?;
    info!(path = %path.as_ref().display(), "ledger report exported to JSON");
    Ok(())
}

/// Write `rides.csv`, `drivers.csv` and `report.json` into `dir`.
///
/// The CSV files are skipped when there is nothing to put in them; the report is
/// always written. Returns the paths that were written.
pub fn export_report_bundle(
    ledger: &Ledger,
    report: &LedgerReport,
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let dir = dir.as_ref();
    let mut written = Vec::with_capacity(3);

    let rides = ledger.query().rides();
    if !rides.is_empty() {
        let path = dir.join("rides.csv");
        export_rides_to_csv(&rides, &path)?;
        written.push(path);
    }
    if !report.drivers.is_empty() {
        let path = dir.join("drivers.csv");
        export_driver_summaries_to_csv(&report.drivers, &path)?;
        written.push(path);
    }
    let path = dir.join("report.json");
    export_report_to_json(report, &path)?;
    written.push(path);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::summarize_ledger;
    use ride_core::test_helpers::dispatched_ledger;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_export_rides_to_csv() {
        let (ledger, _) = dispatched_ledger();
        let file = NamedTempFile::new().unwrap();
        export_rides_to_csv(&ledger.query().rides(), file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "ride_id,pickup,dropoff,distance,category,fare");
        assert_eq!(lines[1], "1,Downtown,Airport,10,standard,15.00");
        assert_eq!(lines[2], "2,Uptown,Mall,8,premium,29.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_rides_to_json() {
        let (ledger, _) = dispatched_ledger();
        let file = NamedTempFile::new().unwrap();
        export_rides_to_json(&ledger.query().rides(), file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["fare"], 29.0);
    }

    #[test]
    fn test_export_driver_summaries_to_csv() {
        let (ledger, _) = dispatched_ledger();
        let report = summarize_ledger(&ledger).unwrap();
        let file = NamedTempFile::new().unwrap();
        export_driver_summaries_to_csv(&report.drivers, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("1,Alice Johnson,4.9,2,44.00,22.00"));
    }

    #[test]
    fn test_export_report_creates_parent_dirs() {
        let (ledger, _) = dispatched_ledger();
        let report = summarize_ledger(&ledger).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        export_report_to_json(&report, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"total_fares\": 44.0"));
    }

    #[test]
    fn test_bundle_skips_empty_lists() {
        let ledger = Ledger::new();
        ledger.register_driver("Idle", 4.0).unwrap();
        let report = summarize_ledger(&ledger).unwrap();
        let dir = tempdir().unwrap();

        let written = export_report_bundle(&ledger, &report, dir.path()).unwrap();
        assert_eq!(
            written,
            vec![dir.path().join("drivers.csv"), dir.path().join("report.json")]
        );
        assert!(!dir.path().join("rides.csv").exists());
    }

    #[test]
    fn test_bundle_writes_everything_for_a_dispatched_ledger() {
        let (ledger, _) = dispatched_ledger();
        let report = summarize_ledger(&ledger).unwrap();
        let dir = tempdir().unwrap();

        let written = export_report_bundle(&ledger, &report, dir.path()).unwrap();
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|path| path.exists()));
    }

    #[test]
    fn test_empty_rides_are_rejected() {
        let file = NamedTempFile::new().unwrap();
        let err = export_rides_to_csv(&[], file.path()).unwrap_err();
        assert_eq!(err.to_string(), "Nothing to export");
        assert!(export_rides_to_json(&[], file.path()).is_err());
        assert!(export_driver_summaries_to_csv(&[], file.path()).is_err());
    }
}
