//! Reporting on top of a [`ride_core::ledger::Ledger`]: text rendering, aggregate
//! metrics and CSV/JSON export.
//!
//! Everything here goes through [`ride_core::query::LedgerQuery`]; nothing in this
//! crate mutates a ledger.
//!
//! # Quick Start
//!
//! ```no_run
//! use ride_core::ledger::Ledger;
//! use ride_core::scenario::{build_scenario, ScenarioParams};
//! use ride_reports::{export_report_to_json, summarize_ledger};
//!
//! let ledger = Ledger::new();
//! build_scenario(&ledger, ScenarioParams::default().with_seed(42)).unwrap();
//!
//! let report = summarize_ledger(&ledger).unwrap();
//! export_report_to_json(&report, "ledger_report.json").unwrap();
//! ```
//!
//! - [`render`]: console text for rides, drivers and riders
//! - [`metrics`]: per-driver, per-rider and per-category summaries
//! - [`export`]: CSV and JSON writers

pub mod export;
pub mod metrics;
pub mod render;

pub use export::{
    export_driver_summaries_to_csv, export_report_bundle, export_report_to_json,
    export_rides_to_csv, export_rides_to_json,
};
pub use metrics::{
    summarize_ledger, CategorySummary, DriverSummary, LedgerReport, RiderSummary,
};
