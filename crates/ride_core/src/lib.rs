//! Fare computation and ride-dispatch ledger.
//!
//! - [`catalog`]: ride categories and the [`fare::FareRule`] each one prices with
//! - [`ledger`]: the single owner of rides, drivers, riders and assignments
//! - [`query`]: read-only views over a ledger for reporting
//! - [`scenario`]: seeded sample data for demos, tests and benchmarks
//!
//! ```rust
//! use ride_core::catalog::STANDARD;
//! use ride_core::ledger::Ledger;
//!
//! let ledger = Ledger::new();
//! let alice = ledger.register_driver("Alice", 4.9).unwrap();
//! let ride = ledger.submit_ride("Downtown", "Airport", 10.0, STANDARD).unwrap();
//! ledger.assign_to_driver(ride.id(), alice).unwrap();
//!
//! let rides = ledger.query().driver_rides(alice).unwrap();
//! assert_eq!(rides[0].fare(), 15.0);
//! ```

pub mod catalog;
pub mod error;
pub mod fare;
pub mod fare_table;
pub mod ids;
pub mod ledger;
pub mod query;
pub mod record;
pub mod scenario;
pub mod telemetry;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use catalog::{Category, RideCatalog};
pub use error::{LedgerError, Result};
pub use fare::{Distance, FareRule, LinearFare, SurgeFare};
pub use ids::{DriverId, RideId, RiderId};
pub use ledger::{AssignOutcome, Ledger};
pub use query::LedgerQuery;
pub use record::{Assignment, Driver, RideRecord, Rider};
