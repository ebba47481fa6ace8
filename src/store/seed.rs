use super::EntityStore;
use crate::model::{City, Country};

impl EntityStore {
    /// The built-in data set the service starts with.
    pub fn seeded() -> Self {
        Self::new(
            vec![
                Country::new(1, "United States"),
                Country::new(2, "France"),
                Country::new(3, "Japan"),
            ],
            vec![
                City::new(1, "New York City", 1),
                City::new(2, "Paris", 2),
                City::new(3, "Tokyo", 3),
                City::new(4, "Los Angeles", 1),
                City::new(5, "Marseille", 2),
                City::new(6, "Osaka", 3),
            ],
        )
    }
}
