//! The ledger: single owner of rides, drivers, riders and their assignments.
//!
//! All state lives behind one [`RwLock`]. Mutations take the write guard for their
//! whole validate-then-apply sequence, so concurrent callers are serialized and a
//! reader can never observe a ride whose assignment map and owner list disagree.
//! Every operation validates before it mutates; a failed call leaves the ledger
//! untouched.

use std::collections::{BTreeMap, HashMap};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

use crate::catalog::RideCatalog;
use crate::error::{LedgerError, Result};
use crate::fare::{checked_fare, Distance, FareRule};
use crate::ids::{DriverId, IdSequence, RideId, RiderId};
use crate::query::LedgerQuery;
use crate::record::{Assignment, Driver, RideRecord, Rider};

/// Highest accepted driver rating.
pub const MAX_RATING: f64 = 5.0;

/// Ratings must be finite and within `[0, MAX_RATING]`.
pub(crate) fn validate_rating(rating: f64) -> Result<f64> {
    if rating.is_finite() && (0.0..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(LedgerError::InvalidRating(rating))
    }
}

/// Result of an assignment call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The association was created.
    Assigned,
    /// The ride was already associated with the same driver/rider; nothing changed.
    Unchanged,
}

#[derive(Debug, Default)]
pub(crate) struct LedgerState {
    pub(crate) catalog: RideCatalog,
    pub(crate) rides: BTreeMap<RideId, RideRecord>,
    pub(crate) drivers: BTreeMap<DriverId, Driver>,
    pub(crate) riders: BTreeMap<RiderId, Rider>,
    /// One entry per ride, created on submission.
    pub(crate) assignments: HashMap<RideId, Assignment>,
    ride_ids: IdSequence,
    driver_ids: IdSequence,
    rider_ids: IdSequence,
}

impl LedgerState {
    fn submit(
        &mut self,
        pickup: String,
        dropoff: String,
        distance: Distance,
        category: &str,
    ) -> Result<RideRecord> {
        let (category, rule) = self.catalog.lookup(category)?;
        let fare = checked_fare(rule.as_ref(), distance)?;
        let id = RideId(self.ride_ids.next());
        let record = RideRecord::new(id, pickup, dropoff, distance, category.clone(), fare);

        self.assignments.insert(id, Assignment::default());
        self.rides.insert(id, record.clone());
        Ok(record)
    }

    fn assign_driver(&mut self, ride: RideId, driver: DriverId) -> Result<AssignOutcome> {
        let assignment = self
            .assignments
            .get_mut(&ride)
            .ok_or(LedgerError::RideNotFound(ride))?;
        let profile = self
            .drivers
            .get_mut(&driver)
            .ok_or(LedgerError::DriverNotFound(driver))?;

        match assignment.driver {
            Some(current) if current == driver => return Ok(AssignOutcome::Unchanged),
            Some(current) => {
                return Err(LedgerError::AlreadyAssigned {
                    ride,
                    holder: format!("driver {current}"),
                })
            }
            None => {}
        }

        assignment.driver = Some(driver);
        profile.rides.push(ride);
        Ok(AssignOutcome::Assigned)
    }

    fn assign_rider(&mut self, ride: RideId, rider: RiderId) -> Result<AssignOutcome> {
        let assignment = self
            .assignments
            .get_mut(&ride)
            .ok_or(LedgerError::RideNotFound(ride))?;
        let profile = self
            .riders
            .get_mut(&rider)
            .ok_or(LedgerError::RiderNotFound(rider))?;

        match assignment.rider {
            Some(current) if current == rider => return Ok(AssignOutcome::Unchanged),
            Some(current) => {
                return Err(LedgerError::AlreadyAssigned {
                    ride,
                    holder: format!("rider {current}"),
                })
            }
            None => {}
        }

        assignment.rider = Some(rider);
        profile.rides.push(ride);
        Ok(AssignOutcome::Assigned)
    }
}

/// Authoritative in-memory store. `Ledger` is `Send + Sync`; share it behind an
/// `Arc` (or by reference in scoped threads) to use it from several threads.
#[derive(Debug)]
pub struct Ledger {
    state: RwLock<LedgerState>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Ledger pricing with the built-in `standard` and `premium` categories.
    pub fn new() -> Self {
        Self::with_catalog(RideCatalog::with_builtin_categories())
    }

    pub fn with_catalog(catalog: RideCatalog) -> Self {
        Self {
            state: RwLock::new(LedgerState {
                catalog,
                ..LedgerState::default()
            }),
        }
    }

    /// Read-only view used for reporting.
    pub fn query(&self) -> LedgerQuery<'_> {
        LedgerQuery::new(self)
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, LedgerState> {
        self.state.read()
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerState> {
        self.state.write()
    }

    /// Add a pricing tier to this ledger's catalog. Rides already submitted keep
    /// their fare.
    pub fn register_category(&self, name: &str, rule: impl FareRule + 'static) -> Result<()> {
        self.write().catalog.register(name, rule)
    }

    /// Price a trip with this ledger's catalog without submitting it.
    pub fn quote(&self, category: &str, distance: f64) -> Result<f64> {
        self.read().catalog.quote(category, distance)
    }

    /// Record a new ride. The fare is computed here, once, from the category's rule.
    ///
    /// Fails with `InvalidDistance` for negative or non-finite distances,
    /// `UnknownCategory` when `category` is not registered and `InvalidFare` when the
    /// rule prices the trip below zero or at NaN. Nothing is stored then.
    pub fn submit_ride(
        &self,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance: f64,
        category: &str,
    ) -> Result<RideRecord> {
        let distance = Distance::new(distance).inspect_err(|error| {
            warn!(category, %error, "ride submission rejected");
        })?;

        let record = self
            .write()
            .submit(pickup.into(), dropoff.into(), distance, category)
            .inspect_err(|error| warn!(category, %error, "ride submission rejected"))?;

        debug!(
            ride = %record.id(),
            category = %record.category(),
            distance = record.distance().get(),
            fare = record.fare(),
            "ride submitted"
        );
        Ok(record)
    }

    /// Register a driver. Ratings must be finite and within `[0, 5]`.
    pub fn register_driver(&self, name: impl Into<String>, rating: f64) -> Result<DriverId> {
        let rating = validate_rating(rating)?;
        let name = name.into();
        let mut state = self.write();
        let id = DriverId(state.driver_ids.next());
        info!(driver = %id, name = %name, rating, "driver registered");
        state.drivers.insert(
            id,
            Driver {
                id,
                name,
                rating,
                rides: Vec::new(),
            },
        );
        Ok(id)
    }

    pub fn register_rider(&self, name: impl Into<String>) -> RiderId {
        let name = name.into();
        let mut state = self.write();
        let id = RiderId(state.rider_ids.next());
        info!(rider = %id, name = %name, "rider registered");
        state.riders.insert(
            id,
            Rider {
                id,
                name,
                rides: Vec::new(),
            },
        );
        id
    }

    /// Associate a ride with a driver.
    ///
    /// Re-assigning the same driver is a no-op returning [`AssignOutcome::Unchanged`].
    /// A ride that already has a different driver fails with `AlreadyAssigned`.
    pub fn assign_to_driver(&self, ride: RideId, driver: DriverId) -> Result<AssignOutcome> {
        let outcome = self
            .write()
            .assign_driver(ride, driver)
            .inspect_err(|error| warn!(%ride, %driver, %error, "driver assignment rejected"))?;
        match outcome {
            AssignOutcome::Assigned => info!(%ride, %driver, "ride assigned to driver"),
            AssignOutcome::Unchanged => debug!(%ride, %driver, "ride already assigned to driver"),
        }
        Ok(outcome)
    }

    /// Associate a ride with the rider who requested it. Same contract as
    /// [`Ledger::assign_to_driver`], tracked independently of the driver side.
    pub fn request_ride(&self, ride: RideId, rider: RiderId) -> Result<AssignOutcome> {
        let outcome = self
            .write()
            .assign_rider(ride, rider)
            .inspect_err(|error| warn!(%ride, %rider, %error, "ride request rejected"))?;
        match outcome {
            AssignOutcome::Assigned => info!(%ride, %rider, "ride requested by rider"),
            AssignOutcome::Unchanged => debug!(%ride, %rider, "ride already requested by rider"),
        }
        Ok(outcome)
    }
}
