//! Aggregated ledger metrics.
//!
//! Per-driver and per-rider summaries are computed in parallel with rayon. Each
//! summary takes its profile and rides from one read of the ledger, so under
//! concurrent writes different summaries may reflect slightly different moments
//! while each one is internally consistent.

use std::collections::HashMap;

use rayon::prelude::*;
use ride_core::catalog::Category;
use ride_core::error::Result;
use ride_core::ids::{DriverId, RiderId};
use ride_core::ledger::Ledger;
use ride_core::query::LedgerQuery;
use ride_core::record::RideRecord;
use ride_core::telemetry::LedgerCounts;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverSummary {
    pub driver_id: DriverId,
    pub name: String,
    pub rating: f64,
    pub rides: usize,
    /// Sum of fares of assigned rides.
    pub total_fare: f64,
    /// `total_fare / rides`, 0 when the driver has no rides.
    pub average_fare: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiderSummary {
    pub rider_id: RiderId,
    pub name: String,
    pub rides: usize,
    pub total_spend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub rides: usize,
    pub revenue: f64,
    pub average_fare: f64,
}

/// Everything the reporting layer knows about one ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerReport {
    pub counts: LedgerCounts,
    /// Sum of all ride fares, assigned or not.
    pub total_fares: f64,
    pub drivers: Vec<DriverSummary>,
    pub riders: Vec<RiderSummary>,
    pub categories: Vec<CategorySummary>,
}

fn fare_total(rides: &[RideRecord]) -> f64 {
    rides.iter().map(RideRecord::fare).sum()
}

fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

pub fn driver_summary(query: &LedgerQuery<'_>, driver_id: DriverId) -> Result<DriverSummary> {
    let (driver, rides) = query.driver_with_rides(driver_id)?;
    let total_fare = fare_total(&rides);
    Ok(DriverSummary {
        driver_id,
        name: driver.name,
        rating: driver.rating,
        rides: rides.len(),
        total_fare,
        average_fare: average(total_fare, rides.len()),
    })
}

pub fn rider_summary(query: &LedgerQuery<'_>, rider_id: RiderId) -> Result<RiderSummary> {
    let (rider, rides) = query.rider_with_rides(rider_id)?;
    Ok(RiderSummary {
        rider_id,
        name: rider.name,
        rides: rides.len(),
        total_spend: fare_total(&rides),
    })
}

/// Per-category totals in catalog order; categories without rides are included with zeros.
pub fn category_summaries(categories: &[Category], rides: &[RideRecord]) -> Vec<CategorySummary> {
    let mut totals: HashMap<&Category, (usize, f64)> = HashMap::with_capacity(categories.len());
    for ride in rides {
        let entry = totals.entry(ride.category()).or_default();
        entry.0 += 1;
        entry.1 += ride.fare();
    }

    categories
        .iter()
        .map(|category| {
            let (rides, revenue) = totals.get(category).copied().unwrap_or_default();
            CategorySummary {
                category: category.clone(),
                rides,
                revenue,
                average_fare: average(revenue, rides),
            }
        })
        .collect()
}

/// Build a full report. Driver and rider summaries are computed in parallel.
pub fn summarize_ledger(ledger: &Ledger) -> Result<LedgerReport> {
    let query = ledger.query();

    let drivers = query
        .driver_ids()
        .par_iter()
        .map(|id| driver_summary(&query, *id))
        .collect::<Result<Vec<_>>>()?;
    let riders = query
        .rider_ids()
        .par_iter()
        .map(|id| rider_summary(&query, *id))
        .collect::<Result<Vec<_>>>()?;

    let rides = query.rides();
    let categories = category_summaries(&query.categories(), &rides);
    let counts = query.counts();
    debug!(
        drivers = drivers.len(),
        riders = riders.len(),
        rides = rides.len(),
        "ledger summarized"
    );

    Ok(LedgerReport {
        counts,
        total_fares: fare_total(&rides),
        drivers,
        riders,
        categories,
    })
}
