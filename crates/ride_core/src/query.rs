//! Read-only access to a [`Ledger`].
//!
//! Each method takes the ledger's read guard once, so the returned data is a
//! consistent copy even while other threads submit or assign rides. Nothing here
//! mutates the ledger.

use crate::catalog::Category;
use crate::error::{LedgerError, Result};
use crate::ids::{DriverId, RideId, RiderId};
use crate::ledger::{Ledger, LedgerState};
use crate::record::{Assignment, Driver, RideRecord, Rider};
use crate::telemetry::LedgerCounts;

#[derive(Debug, Clone, Copy)]
pub struct LedgerQuery<'a> {
    ledger: &'a Ledger,
}

impl<'a> LedgerQuery<'a> {
    pub(crate) fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Rides assigned to `driver`, in assignment order.
    pub fn driver_rides(&self, driver: DriverId) -> Result<Vec<RideRecord>> {
        let state = self.ledger.read();
        let profile = state
            .drivers
            .get(&driver)
            .ok_or(LedgerError::DriverNotFound(driver))?;
        Ok(collect_rides(&state, &profile.rides))
    }

    /// Rides requested by `rider`, in request order.
    pub fn rider_rides(&self, rider: RiderId) -> Result<Vec<RideRecord>> {
        let state = self.ledger.read();
        let profile = state
            .riders
            .get(&rider)
            .ok_or(LedgerError::RiderNotFound(rider))?;
        Ok(collect_rides(&state, &profile.rides))
    }

    /// Driver profile and assigned rides taken from the same read.
    pub fn driver_with_rides(&self, driver: DriverId) -> Result<(Driver, Vec<RideRecord>)> {
        let state = self.ledger.read();
        let profile = state
            .drivers
            .get(&driver)
            .ok_or(LedgerError::DriverNotFound(driver))?;
        Ok((profile.clone(), collect_rides(&state, &profile.rides)))
    }

    /// Rider profile and requested rides taken from the same read.
    pub fn rider_with_rides(&self, rider: RiderId) -> Result<(Rider, Vec<RideRecord>)> {
        let state = self.ledger.read();
        let profile = state
            .riders
            .get(&rider)
            .ok_or(LedgerError::RiderNotFound(rider))?;
        Ok((profile.clone(), collect_rides(&state, &profile.rides)))
    }

    pub fn ride_by_id(&self, ride: RideId) -> Result<RideRecord> {
        self.ledger
            .read()
            .rides
            .get(&ride)
            .cloned()
            .ok_or(LedgerError::RideNotFound(ride))
    }

    pub fn assignment(&self, ride: RideId) -> Result<Assignment> {
        self.ledger
            .read()
            .assignments
            .get(&ride)
            .copied()
            .ok_or(LedgerError::RideNotFound(ride))
    }

    pub fn driver(&self, driver: DriverId) -> Result<Driver> {
        self.ledger
            .read()
            .drivers
            .get(&driver)
            .cloned()
            .ok_or(LedgerError::DriverNotFound(driver))
    }

    pub fn rider(&self, rider: RiderId) -> Result<Rider> {
        self.ledger
            .read()
            .riders
            .get(&rider)
            .cloned()
            .ok_or(LedgerError::RiderNotFound(rider))
    }

    /// All rides in id (submission) order.
    pub fn rides(&self) -> Vec<RideRecord> {
        self.ledger.read().rides.values().cloned().collect()
    }

    pub fn drivers(&self) -> Vec<Driver> {
        self.ledger.read().drivers.values().cloned().collect()
    }

    pub fn riders(&self) -> Vec<Rider> {
        self.ledger.read().riders.values().cloned().collect()
    }

    pub fn driver_ids(&self) -> Vec<DriverId> {
        self.ledger.read().drivers.keys().copied().collect()
    }

    pub fn rider_ids(&self) -> Vec<RiderId> {
        self.ledger.read().riders.keys().copied().collect()
    }

    /// Categories known to the ledger's catalog, in registration order.
    pub fn categories(&self) -> Vec<Category> {
        self.ledger.read().catalog.categories().cloned().collect()
    }

    pub fn counts(&self) -> LedgerCounts {
        let state = self.ledger.read();
        let mut counts = LedgerCounts {
            rides: state.rides.len(),
            drivers: state.drivers.len(),
            riders: state.riders.len(),
            ..LedgerCounts::default()
        };
        for assignment in state.assignments.values() {
            counts.add_assignment(assignment);
        }
        counts
    }
}

// Ids come from owner lists, which only ever reference stored rides.
fn collect_rides(state: &LedgerState, ids: &[RideId]) -> Vec<RideRecord> {
    ids.iter()
        .filter_map(|id| state.rides.get(id).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PREMIUM, STANDARD};

    #[test]
    fn driver_rides_keep_assignment_order() {
        let ledger = Ledger::new();
        let driver = ledger.register_driver("Alice", 4.9).expect("driver");
        let first = ledger.submit_ride("A", "B", 1.0, STANDARD).expect("first");
        let second = ledger.submit_ride("C", "D", 2.0, PREMIUM).expect("second");

        ledger.assign_to_driver(second.id(), driver).expect("assign second");
        ledger.assign_to_driver(first.id(), driver).expect("assign first");

        let rides = ledger.query().driver_rides(driver).expect("rides");
        let ids: Vec<_> = rides.iter().map(RideRecord::id).collect();
        assert_eq!(ids, vec![second.id(), first.id()]);
    }

    #[test]
    fn profile_and_rides_come_from_one_read() {
        let ledger = Ledger::new();
        let driver = ledger.register_driver("Alice", 4.9).expect("driver");
        let rider = ledger.register_rider("Bob");
        let ride = ledger.submit_ride("A", "B", 4.0, PREMIUM).expect("ride");
        ledger.assign_to_driver(ride.id(), driver).expect("assign");
        ledger.request_ride(ride.id(), rider).expect("request");

        let (profile, rides) = ledger.query().driver_with_rides(driver).expect("driver");
        assert_eq!(profile.rides, vec![ride.id()]);
        assert_eq!(rides, vec![ride.clone()]);

        let (profile, rides) = ledger.query().rider_with_rides(rider).expect("rider");
        assert_eq!(profile.name, "Bob");
        assert_eq!(rides, vec![ride]);

        assert_eq!(
            ledger.query().driver_with_rides(DriverId(7)).map(|(d, _)| d.id),
            Err(LedgerError::DriverNotFound(DriverId(7)))
        );
    }

    #[test]
    fn unknown_owners_and_rides_are_errors() {
        let ledger = Ledger::new();
        let query = ledger.query();
        assert_eq!(
            query.driver_rides(DriverId(9)),
            Err(LedgerError::DriverNotFound(DriverId(9)))
        );
        assert_eq!(
            query.rider_rides(RiderId(9)),
            Err(LedgerError::RiderNotFound(RiderId(9)))
        );
        assert_eq!(
            query.ride_by_id(RideId(9)),
            Err(LedgerError::RideNotFound(RideId(9)))
        );
    }

    #[test]
    fn counts_track_each_side_independently() {
        let ledger = Ledger::new();
        let driver = ledger.register_driver("Alice", 4.9).expect("driver");
        let rider = ledger.register_rider("Bob");
        let both = ledger.submit_ride("A", "B", 1.0, STANDARD).expect("both");
        let driver_only = ledger.submit_ride("A", "B", 1.0, STANDARD).expect("driver only");
        let rider_only = ledger.submit_ride("A", "B", 1.0, STANDARD).expect("rider only");
        ledger.submit_ride("A", "B", 1.0, STANDARD).expect("unassigned");

        ledger.assign_to_driver(both.id(), driver).expect("assign");
        ledger.request_ride(both.id(), rider).expect("request");
        ledger.assign_to_driver(driver_only.id(), driver).expect("assign");
        ledger.request_ride(rider_only.id(), rider).expect("request");

        let counts = ledger.query().counts();
        assert_eq!(
            counts,
            LedgerCounts {
                rides: 4,
                drivers: 1,
                riders: 1,
                rides_with_driver: 2,
                rides_with_rider: 2,
                unassigned_rides: 1,
            }
        );
    }

    #[test]
    fn listings_are_in_id_order() {
        let ledger = Ledger::new();
        let alice = ledger.register_driver("Alice", 4.9).expect("alice");
        let carol = ledger.register_driver("Carol", 4.1).expect("carol");
        let bob = ledger.register_rider("Bob");

        assert_eq!(ledger.query().driver_ids(), vec![alice, carol]);
        assert_eq!(ledger.query().rider_ids(), vec![bob]);
        assert_eq!(
            ledger
                .query()
                .drivers()
                .iter()
                .map(|driver| driver.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Alice", "Carol"]
        );
        assert_eq!(ledger.query().riders()[0].name, "Bob");
        assert_eq!(
            ledger.query().categories(),
            vec![Category::new(STANDARD), Category::new(PREMIUM)]
        );
        assert!(ledger.query().rides().is_empty());
    }
}
