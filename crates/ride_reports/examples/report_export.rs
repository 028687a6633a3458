//! Build a seeded scenario and export rides, driver summaries and the full report.
//!
//! ```sh
//! cargo run -p ride_reports --example report_export -- --seed 42 --output-dir target/reports
//! ```

use std::path::PathBuf;
use std::time::Instant;

use ride_core::ledger::Ledger;
use ride_core::scenario::{build_scenario, ScenarioParams};
use ride_reports::render::counts_summary;
use ride_reports::{export_report_bundle, summarize_ledger};
use tracing_subscriber::EnvFilter;

fn arg_value(name: &str) -> Option<String> {
    std::env::args().skip_while(|a| a != name).nth(1)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed: u64 = arg_value("--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let num_rides: usize = arg_value("--rides")
        .and_then(|s| s.parse().ok())
        .unwrap_or(1_000);
    let output_dir = PathBuf::from(arg_value("--output-dir").unwrap_or_else(|| "reports".into()));

    let start = Instant::now();
    let ledger = Ledger::new();
    build_scenario(
        &ledger,
        ScenarioParams::default()
            .with_seed(seed)
            .with_counts(25, 100, num_rides),
    )?;
    let report = summarize_ledger(&ledger)?;
    println!("Scenario built and summarized in {:.2?}", start.elapsed());
    print!("{}", counts_summary(&report.counts));
    println!("Total fares: ${:.2}", report.total_fares);
    for category in &report.categories {
        println!(
            "  {:<10} {:>6} rides  ${:>10.2}  avg ${:.2}",
            category.category.label(),
            category.rides,
            category.revenue,
            category.average_fare
        );
    }

    for path in export_report_bundle(&ledger, &report, &output_dir)? {
        println!("Wrote {}", path.display());
    }
    println!("Exports written to {}", output_dir.display());

    Ok(())
}
