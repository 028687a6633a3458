//! Immutable ride, driver and rider values handed out by the ledger.

use serde::Serialize;

use crate::catalog::Category;
use crate::fare::Distance;
use crate::ids::{DriverId, RideId, RiderId};

/// One submitted ride. The fare is fixed when the ride is submitted and never
/// recomputed, even if the category's rule is later shadowed by another catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideRecord {
    id: RideId,
    pickup: String,
    dropoff: String,
    distance: Distance,
    category: Category,
    fare: f64,
}

impl RideRecord {
    pub(crate) fn new(
        id: RideId,
        pickup: String,
        dropoff: String,
        distance: Distance,
        category: Category,
        fare: f64,
    ) -> Self {
        Self {
            id,
            pickup,
            dropoff,
            distance,
            category,
            fare,
        }
    }

    pub fn id(&self) -> RideId {
        self.id
    }

    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    pub fn dropoff(&self) -> &str {
        &self.dropoff
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn fare(&self) -> f64 {
        self.fare
    }
}

/// Driver profile snapshot. `rides` lists assigned ride ids in assignment order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub rating: f64,
    pub rides: Vec<RideId>,
}

/// Rider profile snapshot. `rides` lists requested ride ids in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rider {
    pub id: RiderId,
    pub name: String,
    pub rides: Vec<RideId>,
}

/// Who a ride is currently associated with. Both sides are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub driver: Option<DriverId>,
    pub rider: Option<RiderId>,
}
