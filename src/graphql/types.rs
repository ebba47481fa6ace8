use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model::{City as ModelCity, Country as ModelCountry};
use crate::store::{CountryRemoval, SharedStore};

/// This represents a city represented by a country
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub country_id: i32,
}

#[ComplexObject]
impl City {
    /// The country this city belongs to, or null if it no longer exists
    async fn country(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Country>> {
        let store = ctx.data::<SharedStore>()?.read();
        Ok(store.country(self.country_id).cloned().map(Into::into))
    }
}

impl From<ModelCity> for City {
    fn from(c: ModelCity) -> Self {
        Self {
            id: c.id,
            name: c.name,
            country_id: c.country_id,
        }
    }
}

/// This represents a country of a city
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Country {
    /// Cities whose countryId points at this country
    async fn cities(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<City>> {
        let store = ctx.data::<SharedStore>()?.read();
        Ok(store
            .cities_of(self.id)
            .into_iter()
            .cloned()
            .map(Into::into)
            .collect())
    }
}

impl From<ModelCountry> for Country {
    fn from(c: ModelCountry) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// Returned by the delete mutations in place of the removed record
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct DeletedConfirmation {
    /// Id of the removed record
    pub id: i32,
    pub message: String,
}

impl From<ModelCity> for DeletedConfirmation {
    fn from(c: ModelCity) -> Self {
        Self {
            id: c.id,
            message: format!("Deleted city: {}", c.name),
        }
    }
}

impl From<CountryRemoval> for DeletedConfirmation {
    fn from(removal: CountryRemoval) -> Self {
        let message = match removal.cities.len() {
            0 => format!("Deleted country: {}", removal.country.name),
            1 => format!("Deleted country: {} and 1 city", removal.country.name),
            n => format!("Deleted country: {} and {} cities", removal.country.name, n),
        };
        Self {
            id: removal.country.id,
            message,
        }
    }
}
