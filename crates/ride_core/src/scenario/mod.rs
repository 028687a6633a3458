//! Scenario setup: populate a ledger with reproducible sample drivers, riders and rides.
//!
//! Distances, categories, locations and assignments are drawn from a seeded
//! [`rand::rngs::StdRng`], so the same [`ScenarioParams`] always produce the same ledger.

mod build;
mod params;

pub use build::{build_scenario, ScenarioOutcome};
pub use params::{ScenarioParams, DEFAULT_LOCATIONS};
