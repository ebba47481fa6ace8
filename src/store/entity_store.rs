use tracing::{debug, info};

use super::Collection;
use crate::config::{DeletePolicy, StoreSettings};
use crate::error::{EntityKind, GeoError, Result};
use crate::model::{City, Country};

/// Outcome of a successful `delete_country`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRemoval {
    pub country: Country,
    /// Cities removed along with the country (cascade policy only)
    pub cities: Vec<City>,
}

/// Both collections plus the rules for changing them.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    countries: Collection<Country>,
    cities: Collection<City>,
    delete_policy: DeletePolicy,
}

impl EntityStore {
    pub fn new(countries: Vec<Country>, cities: Vec<City>) -> Self {
        Self {
            countries: Collection::from_records(countries),
            cities: Collection::from_records(cities),
            delete_policy: DeletePolicy::default(),
        }
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        let store = if settings.seed {
            Self::seeded()
        } else {
            Self::default()
        };
        store.with_delete_policy(settings.on_country_delete)
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    pub fn countries(&self) -> &Collection<Country> {
        &self.countries
    }

    pub fn cities(&self) -> &Collection<City> {
        &self.cities
    }

    pub fn city(&self, id: i32) -> Option<&City> {
        self.cities.find_by_id(id)
    }

    pub fn country(&self, id: i32) -> Option<&Country> {
        self.countries.find_by_id(id)
    }

    /// The country a city points at, if it still exists.
    pub fn country_of(&self, city: &City) -> Option<&Country> {
        self.countries.find(|c| c.id == city.country_id)
    }

    pub fn cities_of(&self, country_id: i32) -> Vec<&City> {
        self.cities.filter(|c| c.belongs_to(country_id))
    }

    pub fn add_city(&mut self, name: String, country_id: i32) -> City {
        let city = City::new(self.cities.mint_id(), name, country_id);
        self.cities.append(city.clone());
        info!(id = city.id, name = %city.name, country_id, "Added city");
        city
    }

    pub fn add_country(&mut self, name: String) -> Country {
        let country = Country::new(self.countries.mint_id(), name);
        self.countries.append(country.clone());
        info!(id = country.id, name = %country.name, "Added country");
        country
    }

    pub fn update_city(&mut self, id: i32, name: String, country_id: i32) -> Result<City> {
        let index = self.cities.position_of(id).ok_or_else(|| {
            debug!(id, "Update of unknown city");
            GeoError::NotFound(EntityKind::City)
        })?;

        let updated = City::new(id, name, country_id);
        self.cities.replace_at(index, updated.clone());
        info!(id, name = %updated.name, country_id, "Updated city");
        Ok(updated)
    }

    pub fn update_country(&mut self, id: i32, name: String) -> Result<Country> {
        let index = self.countries.position_of(id).ok_or_else(|| {
            debug!(id, "Update of unknown country");
            GeoError::NotFound(EntityKind::Country)
        })?;

        let updated = Country::new(id, name);
        self.countries.replace_at(index, updated.clone());
        info!(id, name = %updated.name, "Updated country");
        Ok(updated)
    }

    pub fn delete_city(&mut self, id: i32) -> Result<City> {
        let removed = self
            .cities
            .position_of(id)
            .and_then(|index| self.cities.remove_at(index))
            .ok_or_else(|| {
                debug!(id, "Delete of unknown city");
                GeoError::NotFound(EntityKind::City)
            })?;

        info!(id, name = %removed.name, "Deleted city");
        Ok(removed)
    }

    /// Remove a country, applying the configured [`DeletePolicy`] to its cities.
    pub fn delete_country(&mut self, id: i32) -> Result<CountryRemoval> {
        let index = self.countries.position_of(id).ok_or_else(|| {
            debug!(id, "Delete of unknown country");
            GeoError::NotFound(EntityKind::Country)
        })?;

        if self.delete_policy == DeletePolicy::Restrict {
            let referencing = self.cities_of(id).len();
            if referencing > 0 {
                debug!(id, referencing, "Refusing to delete referenced country");
                return Err(GeoError::Referenced {
                    country_id: id,
                    cities: referencing,
                });
            }
        }

        let country = self
            .countries
            .remove_at(index)
            .ok_or(GeoError::NotFound(EntityKind::Country))?;

        let cities = match self.delete_policy {
            DeletePolicy::Cascade => self.cities.remove_where(|c| c.belongs_to(id)),
            DeletePolicy::Keep | DeletePolicy::Restrict => Vec::new(),
        };

        info!(
            id,
            name = %country.name,
            cascaded = cities.len(),
            "Deleted country"
        );
        Ok(CountryRemoval { country, cities })
    }
}
