/// Place names rides are drawn between when no locations are configured.
pub const DEFAULT_LOCATIONS: &[&str] = &[
    "Downtown",
    "Airport",
    "Uptown",
    "Mall",
    "Harbor",
    "University",
    "Stadium",
    "Old Town",
];

/// Parameters for building a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioParams {
    pub num_drivers: usize,
    pub num_riders: usize,
    pub num_rides: usize,
    pub seed: Option<u64>,
    /// Trip distance range in miles (uniform).
    pub min_distance: f64,
    pub max_distance: f64,
    /// Driver rating range (uniform, rounded to one decimal).
    pub min_rating: f64,
    pub max_rating: f64,
    /// Categories rides are drawn from. Empty means every category of the ledger's catalog.
    pub categories: Vec<String>,
    /// Locations rides are drawn between. Empty means [`DEFAULT_LOCATIONS`].
    pub locations: Vec<String>,
    /// Probability (0.0–1.0) that a ride is assigned to a random driver.
    pub driver_assign_probability: f64,
    /// Probability (0.0–1.0) that a ride is requested by a random rider.
    pub rider_request_probability: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            num_drivers: 10,
            num_riders: 25,
            num_rides: 100,
            seed: None,
            min_distance: 0.5,
            max_distance: 25.0,
            min_rating: 3.5,
            max_rating: 5.0,
            categories: Vec::new(),
            locations: Vec::new(),
            driver_assign_probability: 0.9,
            rider_request_probability: 1.0,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_counts(mut self, num_drivers: usize, num_riders: usize, num_rides: usize) -> Self {
        self.num_drivers = num_drivers;
        self.num_riders = num_riders;
        self.num_rides = num_rides;
        self
    }

    /// Trip distance in miles: min..=max.
    pub fn with_distance_range(mut self, min_distance: f64, max_distance: f64) -> Self {
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self
    }

    /// Restrict rides to these categories.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_assignment_probabilities(mut self, driver: f64, rider: f64) -> Self {
        self.driver_assign_probability = driver;
        self.rider_request_probability = rider;
        self
    }
}
