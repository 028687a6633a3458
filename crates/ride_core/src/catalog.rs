//! Registry of ride categories and the fare rule each one prices with.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{LedgerError, Result};
use crate::fare::{checked_fare, Distance, FareRule, LinearFare, SurgeFare};
use crate::fare_table::FareTable;

pub const STANDARD: &str = "standard";
pub const PREMIUM: &str = "premium";

/// Name of a registered ride category, e.g. `"standard"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label: the name with its first letter upper-cased (`"premium"` -> `"Premium"`).
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Category registry.
///
/// Categories are immutable once registered and keep their registration order.
/// Rules are shared (`Arc`) so a resolved rule stays usable independently of the
/// catalog it came from.
#[derive(Default, Clone)]
pub struct RideCatalog {
    entries: Vec<(Category, Arc<dyn FareRule>)>,
    index: HashMap<Category, usize>,
}

impl RideCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the `standard` and `premium` tiers.
    pub fn with_builtin_categories() -> Self {
        let mut catalog = Self::new();
        catalog.insert(Category::new(STANDARD), Arc::new(LinearFare::standard()));
        catalog.insert(Category::new(PREMIUM), Arc::new(LinearFare::premium()));
        catalog
    }

    /// Build a catalog from a validated fare table.
    pub fn from_fare_table(table: &FareTable) -> Result<Self> {
        table.validate()?;
        let mut catalog = Self::new();
        for entry in &table.categories {
            let linear: Arc<dyn FareRule> =
                Arc::new(LinearFare::new(entry.base_fare, entry.per_distance_rate)?);
            let rule: Arc<dyn FareRule> = match entry.surge_multiplier {
                Some(multiplier) => Arc::new(SurgeFare::new(linear, multiplier)?),
                None => linear,
            };
            catalog.register_shared(entry.name.as_str(), rule)?;
        }
        Ok(catalog)
    }

    /// Register `rule` under `name`. Fails with `DuplicateCategory` if the name is taken.
    pub fn register(&mut self, name: impl Into<Category>, rule: impl FareRule + 'static) -> Result<()> {
        self.register_shared(name, Arc::new(rule))
    }

    /// Like [`RideCatalog::register`] for a rule that is already shared.
    pub fn register_shared(
        &mut self,
        name: impl Into<Category>,
        rule: Arc<dyn FareRule>,
    ) -> Result<()> {
        let category = name.into();
        if self.index.contains_key(&category) {
            return Err(LedgerError::DuplicateCategory(category.0));
        }
        info!(category = %category, "registered ride category");
        self.insert(category, rule);
        Ok(())
    }

    fn insert(&mut self, category: Category, rule: Arc<dyn FareRule>) {
        self.index.insert(category.clone(), self.entries.len());
        self.entries.push((category, rule));
    }

    /// Look up the rule for `name`. Fails with `UnknownCategory` if absent.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn FareRule>> {
        self.lookup(name).map(|(_, rule)| Arc::clone(rule))
    }

    pub(crate) fn lookup(&self, name: &str) -> Result<&(Category, Arc<dyn FareRule>)> {
        self.index
            .get(&Category::new(name))
            .map(|&position| &self.entries[position])
            .ok_or_else(|| LedgerError::UnknownCategory(name.to_string()))
    }

    /// Price a trip without recording it.
    pub fn quote(&self, name: &str, distance: f64) -> Result<f64> {
        let distance = Distance::new(distance)?;
        let (_, rule) = self.lookup(name)?;
        checked_fare(rule.as_ref(), distance)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&Category::new(name))
    }

    /// Registered categories in registration order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter().map(|(category, _)| category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for RideCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RideCatalog")
            .field("categories", &self.categories().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare_table::FareTableEntry;

    #[test]
    fn builtin_categories_resolve() {
        let catalog = RideCatalog::with_builtin_categories();
        let distance = Distance::new(10.0).expect("distance");
        assert_eq!(catalog.resolve(STANDARD).expect("standard").fare(distance), 15.0);
        assert_eq!(catalog.resolve(PREMIUM).expect("premium").fare(distance), 35.0);
        assert_eq!(
            catalog.categories().map(Category::as_str).collect::<Vec<_>>(),
            vec!["standard", "premium"]
        );
    }

    #[test]
    fn duplicate_registration_is_rejected_and_keeps_original_rule() {
        let mut catalog = RideCatalog::with_builtin_categories();
        let error = catalog
            .register(STANDARD, LinearFare::new(100.0, 100.0).expect("rule"))
            .expect_err("duplicate");
        assert_eq!(error, LedgerError::DuplicateCategory("standard".to_string()));
        assert_eq!(catalog.quote(STANDARD, 2.0), Ok(3.0));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn unknown_category_fails_resolution() {
        let catalog = RideCatalog::with_builtin_categories();
        assert!(matches!(
            catalog.resolve("unknown"),
            Err(LedgerError::UnknownCategory(name)) if name == "unknown"
        ));
        assert!(!catalog.contains("unknown"));
    }

    #[test]
    fn new_tiers_register_without_touching_existing_ones() {
        let mut catalog = RideCatalog::with_builtin_categories();
        let surge = SurgeFare::new(catalog.resolve(PREMIUM).expect("premium"), 1.5)
            .expect("surge");
        catalog.register("premium_surge", surge).expect("register surge");
        catalog
            .register("scheduled", |distance: Distance| 2.0 + distance.get() * 2.0)
            .expect("register scheduled");

        assert_eq!(catalog.quote("premium_surge", 0.0), Ok(7.5));
        assert_eq!(catalog.quote("scheduled", 4.0), Ok(10.0));
        assert_eq!(catalog.quote(PREMIUM, 0.0), Ok(5.0));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn quote_validates_distance_before_lookup() {
        let catalog = RideCatalog::with_builtin_categories();
        assert_eq!(
            catalog.quote("unknown", -1.0),
            Err(LedgerError::InvalidDistance(-1.0))
        );
    }

    #[test]
    fn from_fare_table_builds_rules() {
        let table = FareTable {
            version: 1,
            categories: vec![
                FareTableEntry {
                    name: "economy".to_string(),
                    base_fare: 1.0,
                    per_distance_rate: 1.0,
                    surge_multiplier: None,
                },
                FareTableEntry {
                    name: "economy_surge".to_string(),
                    base_fare: 1.0,
                    per_distance_rate: 1.0,
                    surge_multiplier: Some(2.0),
                },
            ],
        };
        let catalog = RideCatalog::from_fare_table(&table).expect("catalog");
        assert_eq!(catalog.quote("economy", 3.0), Ok(4.0));
        assert_eq!(catalog.quote("economy_surge", 3.0), Ok(8.0));
    }

    #[test]
    fn category_label_capitalizes_first_letter() {
        assert_eq!(Category::new("standard").label(), "Standard");
        assert_eq!(Category::new("").label(), "");
    }
}
