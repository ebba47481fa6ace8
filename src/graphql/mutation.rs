use async_graphql::{Context, Object};

use crate::store::SharedStore;

use super::types::{City, Country, DeletedConfirmation};

/// Root Mutation
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a city
    async fn add_city(
        &self,
        ctx: &Context<'_>,
        name: String,
        country_id: i32,
    ) -> async_graphql::Result<City> {
        let mut store = ctx.data::<SharedStore>()?.write();
        Ok(store.add_city(name, country_id).into())
    }

    /// Add a country
    async fn add_countries(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Country> {
        let mut store = ctx.data::<SharedStore>()?.write();
        Ok(store.add_country(name).into())
    }

    /// Delete a city
    async fn delete_city(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> async_graphql::Result<DeletedConfirmation> {
        let mut store = ctx.data::<SharedStore>()?.write();
        Ok(store.delete_city(id)?.into())
    }

    /// Delete a country
    async fn delete_country(
        &self,
        ctx: &Context<'_>,
        id: i32,
    ) -> async_graphql::Result<DeletedConfirmation> {
        let mut store = ctx.data::<SharedStore>()?.write();
        Ok(store.delete_country(id)?.into())
    }

    /// Update a city
    async fn update_city(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
        country_id: i32,
    ) -> async_graphql::Result<City> {
        let mut store = ctx.data::<SharedStore>()?.write();
        Ok(store.update_city(id, name, country_id)?.into())
    }

    /// Update a country
    async fn update_country(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
    ) -> async_graphql::Result<Country> {
        let mut store = ctx.data::<SharedStore>()?.write();
        Ok(store.update_country(id, name)?.into())
    }
}
