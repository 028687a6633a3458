//! Reference dispatch: one driver, one rider, a standard and a premium ride.
//!
//! ```sh
//! cargo run -p ride_reports --example dispatch_demo
//! RUST_LOG=debug cargo run -p ride_reports --example dispatch_demo
//! ```

use ride_core::catalog::{PREMIUM, STANDARD};
use ride_core::ledger::Ledger;
use ride_reports::render::{driver_info, ride_details, rider_history};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let ledger = Ledger::new();

    let standard = ledger.submit_ride("Downtown", "Airport", 10.0, STANDARD)?;
    let premium = ledger.submit_ride("Uptown", "Mall", 8.0, PREMIUM)?;

    let driver = ledger.register_driver("Alice Johnson", 4.9)?;
    let rider = ledger.register_rider("Bob Smith");

    for ride in [&standard, &premium] {
        ledger.assign_to_driver(ride.id(), driver)?;
        ledger.request_ride(ride.id(), rider)?;
    }

    println!("{}", ride_details(&standard));
    println!("{}", ride_details(&premium));

    let query = ledger.query();
    println!(
        "{}",
        driver_info(&query.driver(driver)?, &query.driver_rides(driver)?)
    );
    println!(
        "{}",
        rider_history(&query.rider(rider)?, &query.rider_rides(rider)?)
    );

    Ok(())
}
