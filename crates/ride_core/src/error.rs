//! Error type shared by the catalog, the ledger and the query facade.

use thiserror::Error;

use crate::ids::{DriverId, RideId, RiderId};

/// Every failure the core can report. All variants are recoverable; the ledger is
/// never left partially updated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("invalid distance {0}: must be a finite value >= 0")]
    InvalidDistance(f64),
    #[error("invalid fare {0}: a fare rule must yield a finite value >= 0")]
    InvalidFare(f64),
    #[error("invalid driver rating {0}: must be within [0, 5]")]
    InvalidRating(f64),
    #[error("unknown ride category '{0}'")]
    UnknownCategory(String),
    #[error("ride category '{0}' is already registered")]
    DuplicateCategory(String),
    #[error("ride {0} not found")]
    RideNotFound(RideId),
    #[error("driver {0} not found")]
    DriverNotFound(DriverId),
    #[error("rider {0} not found")]
    RiderNotFound(RiderId),
    #[error("ride {ride} is already assigned to {holder}")]
    AlreadyAssigned { ride: RideId, holder: String },
    #[error("invalid fare table: {0}")]
    InvalidFareTable(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let error = LedgerError::RideNotFound(RideId(999));
        assert_eq!(error.to_string(), "ride 999 not found");

        let error = LedgerError::AlreadyAssigned {
            ride: RideId(3),
            holder: format!("driver {}", DriverId(7)),
        };
        assert_eq!(error.to_string(), "ride 3 is already assigned to driver 7");
    }
}
