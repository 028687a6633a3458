//! Test helpers for common ledger setup.
//!
//! These fixtures reproduce the reference dispatch: driver Alice (4.9), rider Bob,
//! a standard ride Downtown -> Airport (10 miles, fare 15.00) and a premium ride
//! Uptown -> Mall (8 miles, fare 29.00).

use crate::catalog::{PREMIUM, STANDARD};
use crate::ids::{DriverId, RiderId};
use crate::ledger::Ledger;
use crate::record::RideRecord;

pub const TEST_DRIVER_NAME: &str = "Alice Johnson";
pub const TEST_DRIVER_RATING: f64 = 4.9;
pub const TEST_RIDER_NAME: &str = "Bob Smith";

/// Ids and records created by [`seeded_ledger`].
#[derive(Debug, Clone)]
pub struct Fixture {
    pub driver: DriverId,
    pub rider: RiderId,
    pub standard_ride: RideRecord,
    pub premium_ride: RideRecord,
}

/// A ledger with the reference driver, rider and rides registered but nothing assigned.
///
/// # Panics
///
/// Panics if the built-in categories are missing (should never happen with [`Ledger::new`]).
pub fn seeded_ledger() -> (Ledger, Fixture) {
    let ledger = Ledger::new();
    let driver = ledger
        .register_driver(TEST_DRIVER_NAME, TEST_DRIVER_RATING)
        .expect("test driver rating is valid");
    let rider = ledger.register_rider(TEST_RIDER_NAME);
    let standard_ride = ledger
        .submit_ride("Downtown", "Airport", 10.0, STANDARD)
        .expect("standard category is built in");
    let premium_ride = ledger
        .submit_ride("Uptown", "Mall", 8.0, PREMIUM)
        .expect("premium category is built in");
    (
        ledger,
        Fixture {
            driver,
            rider,
            standard_ride,
            premium_ride,
        },
    )
}

/// [`seeded_ledger`] with both rides assigned to the driver and requested by the rider.
pub fn dispatched_ledger() -> (Ledger, Fixture) {
    let (ledger, fixture) = seeded_ledger();
    for ride in [&fixture.standard_ride, &fixture.premium_ride] {
        ledger
            .assign_to_driver(ride.id(), fixture.driver)
            .expect("fixture ids exist");
        ledger
            .request_ride(ride.id(), fixture.rider)
            .expect("fixture ids exist");
    }
    (ledger, fixture)
}
