//! GraphQL schema and resolvers.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! geoql serve --port 5000
//!
//! # Execute a query from CLI
//! geoql query '{ country(id: 1) { name cities { name } } }'
//!
//! # Execute a mutation from CLI
//! geoql mutate 'addCity(name: "Lyon", countryId: 2) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `city`, `cities`, `country`, `countries`
//! - **Mutations**: `addCity`, `addCountries`, `deleteCity`, `deleteCountry`,
//!   `updateCity`, `updateCountry`

mod mutation;
mod query;
mod schema;
mod server;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{GeoSchema, build_schema, schema_from_config};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
