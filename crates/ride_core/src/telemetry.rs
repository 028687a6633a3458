//! Aggregated ledger counts for reporting.

use serde::Serialize;

use crate::record::Assignment;

/// Counts taken from one consistent read of the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LedgerCounts {
    pub rides: usize,
    pub drivers: usize,
    pub riders: usize,
    pub rides_with_driver: usize,
    pub rides_with_rider: usize,
    /// Rides with neither a driver nor a rider.
    pub unassigned_rides: usize,
}

impl LedgerCounts {
    pub fn add_assignment(&mut self, assignment: &Assignment) {
        if assignment.driver.is_some() {
            self.rides_with_driver += 1;
        }
        if assignment.rider.is_some() {
            self.rides_with_rider += 1;
        }
        if assignment.driver.is_none() && assignment.rider.is_none() {
            self.unassigned_rides += 1;
        }
    }
}
