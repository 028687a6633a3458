//! Fare rules: pure functions from trip distance to price.
//!
//! A rule never sees an invalid distance: [`Distance`] can only be built from a
//! finite, non-negative value, so negative or NaN inputs are rejected before any
//! rule runs.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{LedgerError, Result};

/// Per-distance rate of the built-in standard tier.
pub const STANDARD_RATE: f64 = 1.5;

/// Per-distance rate of the built-in premium tier.
pub const PREMIUM_RATE: f64 = 3.0;

/// Flat fee added to every premium ride.
pub const PREMIUM_BASE_FARE: f64 = 5.0;

/// Trip distance (miles). Always finite and `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            // Normalize -0.0 so it prints and serializes as 0.
            Ok(Self(value.abs()))
        } else {
            Err(LedgerError::InvalidDistance(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Distance {
    type Error = LedgerError;

    fn try_from(value: f64) -> Result<Self> {
        Distance::new(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pricing capability of a ride category.
///
/// Implementations must be pure: the same distance always yields the same fare,
/// and the fare is never negative. New pricing tiers are added by implementing
/// this trait and registering the rule in a [`crate::catalog::RideCatalog`];
/// neither the catalog nor the ledger needs to change.
///
/// Plain closures qualify as well:
///
/// ```rust
/// use ride_core::catalog::RideCatalog;
/// use ride_core::fare::Distance;
///
/// let mut catalog = RideCatalog::with_builtin_categories();
/// catalog
///     .register("pooled", |distance: Distance| distance.get() * 0.5)
///     .unwrap();
/// assert_eq!(catalog.quote("pooled", 10.0).unwrap(), 5.0);
/// ```
pub trait FareRule: Send + Sync {
    /// Fare for a trip of the given distance.
    fn fare(&self, distance: Distance) -> f64;
}

impl<F> FareRule for F
where
    F: Fn(Distance) -> f64 + Send + Sync,
{
    fn fare(&self, distance: Distance) -> f64 {
        self(distance)
    }
}

/// Run `rule` and reject a result that is negative or not finite.
pub(crate) fn checked_fare(rule: &dyn FareRule, distance: Distance) -> Result<f64> {
    let fare = rule.fare(distance);
    if fare.is_finite() && fare >= 0.0 {
        // -0.0 is stored as 0.
        Ok(fare.abs())
    } else {
        Err(LedgerError::InvalidFare(fare))
    }
}

/// `fare = base_fare + distance * per_distance_rate`.
///
/// Both built-in tiers are linear: standard has no base fare, premium adds a flat fee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFare {
    base_fare: f64,
    per_distance_rate: f64,
}

impl LinearFare {
    /// Fails with `InvalidFare` when either component is negative or not finite,
    /// since such a rule could price a ride below zero.
    pub fn new(base_fare: f64, per_distance_rate: f64) -> Result<Self> {
        for value in [base_fare, per_distance_rate] {
            if !value.is_finite() || value < 0.0 {
                return Err(LedgerError::InvalidFare(value));
            }
        }
        Ok(Self {
            base_fare,
            per_distance_rate,
        })
    }

    /// `distance * 1.5`
    pub const fn standard() -> Self {
        Self {
            base_fare: 0.0,
            per_distance_rate: STANDARD_RATE,
        }
    }

    /// `distance * 3.0 + 5.0`
    pub const fn premium() -> Self {
        Self {
            base_fare: PREMIUM_BASE_FARE,
            per_distance_rate: PREMIUM_RATE,
        }
    }

    pub fn base_fare(&self) -> f64 {
        self.base_fare
    }

    pub fn per_distance_rate(&self) -> f64 {
        self.per_distance_rate
    }
}

impl FareRule for LinearFare {
    fn fare(&self, distance: Distance) -> f64 {
        distance.get() * self.per_distance_rate + self.base_fare
    }
}

/// Scales another rule by a constant multiplier (`>= 1`).
#[derive(Clone)]
pub struct SurgeFare {
    inner: Arc<dyn FareRule>,
    multiplier: f64,
}

impl SurgeFare {
    /// Wrap `inner`. Multipliers below 1 (or non-finite) are rejected so a surge
    /// never discounts a ride.
    pub fn new(inner: Arc<dyn FareRule>, multiplier: f64) -> Result<Self> {
        if !multiplier.is_finite() || multiplier < 1.0 {
            return Err(LedgerError::InvalidFareTable(format!(
                "surge multiplier must be >= 1, got {multiplier}"
            )));
        }
        Ok(Self { inner, multiplier })
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl fmt::Debug for SurgeFare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurgeFare")
            .field("multiplier", &self.multiplier)
            .finish_non_exhaustive()
    }
}

impl FareRule for SurgeFare {
    fn fare(&self, distance: Distance) -> f64 {
        self.inner.fare(distance) * self.multiplier
    }
}
