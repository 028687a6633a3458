use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::{LedgerError, Result};
use crate::fare::Distance;
use crate::ids::{DriverId, RideId, RiderId};
use crate::ledger::{validate_rating, Ledger, MAX_RATING};
use crate::scenario::params::{ScenarioParams, DEFAULT_LOCATIONS};

/// Ids created by [`build_scenario`], in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub seed: u64,
    pub drivers: Vec<DriverId>,
    pub riders: Vec<RiderId>,
    pub rides: Vec<RideId>,
}

/// Clamp to a valid probability; NaN counts as "never".
fn probability(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Register drivers and riders, then submit and assign rides, all drawn from a
/// seeded RNG. Rides are priced by the ledger's own catalog.
///
/// Fails before touching the ledger when the distance or rating ranges are invalid.
/// Category errors (e.g. a configured category the catalog does not know) surface
/// from the first submission that uses it.
pub fn build_scenario(ledger: &Ledger, params: ScenarioParams) -> Result<ScenarioOutcome> {
    let min_distance = Distance::new(params.min_distance)?.get();
    let max_distance = Distance::new(params.max_distance)?.get().max(min_distance);
    let min_rating = validate_rating(params.min_rating)?;
    let max_rating = validate_rating(params.max_rating)?.max(min_rating);
    let driver_probability = probability(params.driver_assign_probability);
    let rider_probability = probability(params.rider_request_probability);

    let categories: Vec<String> = if params.categories.is_empty() {
        ledger
            .query()
            .categories()
            .iter()
            .map(ToString::to_string)
            .collect()
    } else {
        params.categories
    };
    let locations: Vec<String> = if params.locations.is_empty() {
        DEFAULT_LOCATIONS.iter().map(|name| name.to_string()).collect()
    } else {
        params.locations
    };

    let seed = params.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut outcome = ScenarioOutcome {
        seed,
        ..ScenarioOutcome::default()
    };

    for n in 1..=params.num_drivers {
        let rating = (rng.gen_range(min_rating..=max_rating) * 10.0).round() / 10.0;
        let id = ledger.register_driver(format!("Driver {n}"), rating.min(MAX_RATING))?;
        outcome.drivers.push(id);
    }
    for n in 1..=params.num_riders {
        outcome.riders.push(ledger.register_rider(format!("Rider {n}")));
    }

    for _ in 0..params.num_rides {
        let category = categories
            .choose(&mut rng)
            .ok_or_else(|| LedgerError::UnknownCategory("<none registered>".to_string()))?;
        let (pickup, dropoff) = pick_route(&mut rng, &locations);
        let distance = (rng.gen_range(min_distance..=max_distance) * 100.0).round() / 100.0;
        let ride = ledger.submit_ride(pickup, dropoff, distance, category)?.id();
        outcome.rides.push(ride);

        if rng.gen_bool(driver_probability) {
            if let Some(&driver) = outcome.drivers.choose(&mut rng) {
                ledger.assign_to_driver(ride, driver)?;
            }
        }
        if rng.gen_bool(rider_probability) {
            if let Some(&rider) = outcome.riders.choose(&mut rng) {
                ledger.request_ride(ride, rider)?;
            }
        }
    }

    info!(
        seed,
        drivers = outcome.drivers.len(),
        riders = outcome.riders.len(),
        rides = outcome.rides.len(),
        "scenario built"
    );
    Ok(outcome)
}

/// Two distinct locations when more than one is available.
fn pick_route(rng: &mut StdRng, locations: &[String]) -> (String, String) {
    match locations.len() {
        0 => (String::from("Unknown"), String::from("Unknown")),
        1 => (locations[0].clone(), locations[0].clone()),
        len => {
            let pickup = rng.gen_range(0..len);
            let dropoff = (pickup + rng.gen_range(1..len)) % len;
            (locations[pickup].clone(), locations[dropoff].clone())
        }
    }
}
