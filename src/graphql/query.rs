use async_graphql::{Context, Object};

use crate::store::SharedStore;

use super::types::{City, Country};

/// Root Query
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A Single City
    async fn city(&self, ctx: &Context<'_>, id: Option<i32>) -> async_graphql::Result<Option<City>> {
        let store = ctx.data::<SharedStore>()?.read();
        Ok(id
            .and_then(|id| store.city(id))
            .cloned()
            .map(Into::into))
    }

    /// List of All Cities
    async fn cities(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<City>> {
        let store = ctx.data::<SharedStore>()?.read();
        Ok(store.cities().iter().cloned().map(Into::into).collect())
    }

    /// A Single Country
    async fn country(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Country>> {
        let store = ctx.data::<SharedStore>()?.read();
        Ok(id
            .and_then(|id| store.country(id))
            .cloned()
            .map(Into::into))
    }

    /// List of All Countries
    async fn countries(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Country>> {
        let store = ctx.data::<SharedStore>()?.read();
        Ok(store.countries().iter().cloned().map(Into::into).collect())
    }
}
