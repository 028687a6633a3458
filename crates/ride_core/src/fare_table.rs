//! Serializable fare configuration.
//!
//! A fare table describes linear pricing tiers as data so a deployment can change
//! rates without code changes:
//!
//! ```json
//! {
//!   "version": 1,
//!   "categories": [
//!     { "name": "standard", "base_fare": 0.0, "per_distance_rate": 1.5 },
//!     { "name": "premium", "base_fare": 5.0, "per_distance_rate": 3.0 },
//!     { "name": "premium_surge", "base_fare": 5.0, "per_distance_rate": 3.0, "surge_multiplier": 1.8 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{PREMIUM, STANDARD};
use crate::error::{LedgerError, Result};
use crate::fare::{PREMIUM_BASE_FARE, PREMIUM_RATE, STANDARD_RATE};

pub const FARE_TABLE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareTableEntry {
    pub name: String,
    #[serde(default)]
    pub base_fare: f64,
    pub per_distance_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surge_multiplier: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareTable {
    pub version: u32,
    pub categories: Vec<FareTableEntry>,
}

impl Default for FareTable {
    /// The built-in standard and premium tiers.
    fn default() -> Self {
        Self {
            version: FARE_TABLE_VERSION,
            categories: vec![
                FareTableEntry {
                    name: STANDARD.to_string(),
                    base_fare: 0.0,
                    per_distance_rate: STANDARD_RATE,
                    surge_multiplier: None,
                },
                FareTableEntry {
                    name: PREMIUM.to_string(),
                    base_fare: PREMIUM_BASE_FARE,
                    per_distance_rate: PREMIUM_RATE,
                    surge_multiplier: None,
                },
            ],
        }
    }
}

impl FareTable {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let table: FareTable = serde_json::from_str(contents)
            .map_err(|error| LedgerError::InvalidFareTable(format!("malformed JSON: {error}")))?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let table: FareTable = serde_json::from_reader(reader)
            .map_err(|error| LedgerError::InvalidFareTable(format!("malformed JSON: {error}")))?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|error| {
            LedgerError::InvalidFareTable(format!(
                "failed to read '{}': {error}",
                path.display()
            ))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|error| LedgerError::InvalidFareTable(error.to_string()))
    }

    /// Checks version, names and numeric ranges. Fares built from a valid table are
    /// never negative.
    pub fn validate(&self) -> Result<()> {
        if self.version != FARE_TABLE_VERSION {
            return Err(LedgerError::InvalidFareTable(format!(
                "unsupported version {} (expected {FARE_TABLE_VERSION})",
                self.version
            )));
        }
        if self.categories.is_empty() {
            return Err(LedgerError::InvalidFareTable(
                "at least one category is required".to_string(),
            ));
        }

        let mut names = HashSet::with_capacity(self.categories.len());
        for entry in &self.categories {
            if entry.name.trim().is_empty() {
                return Err(LedgerError::InvalidFareTable(
                    "category names must not be empty".to_string(),
                ));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(LedgerError::DuplicateCategory(entry.name.clone()));
            }
            if !entry.base_fare.is_finite() || entry.base_fare < 0.0 {
                return Err(LedgerError::InvalidFareTable(format!(
                    "category '{}': base_fare must be >= 0",
                    entry.name
                )));
            }
            if !entry.per_distance_rate.is_finite() || entry.per_distance_rate < 0.0 {
                return Err(LedgerError::InvalidFareTable(format!(
                    "category '{}': per_distance_rate must be >= 0",
                    entry.name
                )));
            }
            if let Some(multiplier) = entry.surge_multiplier {
                if !multiplier.is_finite() || multiplier < 1.0 {
                    return Err(LedgerError::InvalidFareTable(format!(
                        "category '{}': surge_multiplier must be >= 1",
                        entry.name
                    )));
                }
            }
        }
        Ok(())
    }
}
