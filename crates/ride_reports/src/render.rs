//! Plain-text rendering of ledger data for console output.

use std::fmt::Write;

use ride_core::record::{Driver, RideRecord, Rider};
use ride_core::telemetry::LedgerCounts;

/// Ride details block:
///
/// ```text
/// [Standard Ride]
/// Ride ID: 1
/// Pickup: Downtown
/// Dropoff: Airport
/// Distance: 10 miles
/// Fare: $15.00
/// ```
pub fn ride_details(ride: &RideRecord) -> String {
    format!(
        "[{} Ride]\nRide ID: {}\nPickup: {}\nDropoff: {}\nDistance: {} miles\nFare: ${:.2}\n",
        ride.category().label(),
        ride.id(),
        ride.pickup(),
        ride.dropoff(),
        ride.distance(),
        ride.fare(),
    )
}

/// Driver header followed by the details of each assigned ride.
pub fn driver_info(driver: &Driver, rides: &[RideRecord]) -> String {
    let mut out = format!(
        "Driver: {} (ID: {}, Rating: {})\nAssigned Rides:\n",
        driver.name, driver.id, driver.rating
    );
    push_rides(&mut out, rides);
    out
}

/// Rider header followed by the details of each requested ride.
pub fn rider_history(rider: &Rider, rides: &[RideRecord]) -> String {
    let mut out = format!("Rider: {} (ID: {})\nRide History:\n", rider.name, rider.id);
    push_rides(&mut out, rides);
    out
}

/// One line per count.
pub fn counts_summary(counts: &LedgerCounts) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Rides: {}", counts.rides);
    let _ = writeln!(out, "Drivers: {}", counts.drivers);
    let _ = writeln!(out, "Riders: {}", counts.riders);
    let _ = writeln!(out, "Rides with driver: {}", counts.rides_with_driver);
    let _ = writeln!(out, "Rides with rider: {}", counts.rides_with_rider);
    let _ = writeln!(out, "Unassigned rides: {}", counts.unassigned_rides);
    out
}

fn push_rides(out: &mut String, rides: &[RideRecord]) {
    if rides.is_empty() {
        out.push_str("(none)\n");
        return;
    }
    for ride in rides {
        out.push('\n');
        out.push_str(&ride_details(ride));
    }
}
