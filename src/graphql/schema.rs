use async_graphql::{EmptySubscription, Schema};

use crate::config::GeoConfig;
use crate::store::{EntityStore, SharedStore};

use super::mutation::MutationRoot;
use super::query::QueryRoot;

pub type GeoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build a schema whose resolvers all read and write `store`.
pub fn build_schema(store: SharedStore) -> GeoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Build a schema over a fresh store set up from `config`.
pub fn schema_from_config(config: &GeoConfig) -> GeoSchema {
    build_schema(SharedStore::new(EntityStore::from_settings(&config.store)))
}
