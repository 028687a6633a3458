#![allow(dead_code)]

use ride_core::ledger::Ledger;
use ride_core::scenario::{build_scenario, ScenarioOutcome, ScenarioParams};

/// Float comparison for fares accumulated over many rides.
pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

/// Build a seeded ledger with the given counts.
pub fn scenario_ledger(
    seed: u64,
    drivers: usize,
    riders: usize,
    rides: usize,
) -> (Ledger, ScenarioOutcome) {
    let ledger = Ledger::new();
    let outcome = build_scenario(
        &ledger,
        ScenarioParams::default()
            .with_seed(seed)
            .with_counts(drivers, riders, rides),
    )
    .expect("default scenario params are valid");
    (ledger, outcome)
}
