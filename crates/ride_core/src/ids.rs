//! Identifiers handed out by the ledger.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! ledger_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

ledger_id!(
    /// Ride identifier. Strictly increasing in submission order, never reused.
    RideId
);
ledger_id!(
    /// Driver identifier, assigned on registration.
    DriverId
);
ledger_id!(
    /// Rider identifier, assigned on registration.
    RiderId
);

/// Monotonic id source. The first id issued is 1.
#[derive(Debug, Default, Clone)]
pub(crate) struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub(crate) fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one_and_increments() {
        let mut sequence = IdSequence::default();
        assert_eq!(sequence.next(), 1);
        assert_eq!(sequence.next(), 2);
        assert_eq!(sequence.next(), 3);
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&RideId(42)).expect("serialize");
        assert_eq!(json, "42");
        let back: DriverId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(back, DriverId(7));
    }
}
