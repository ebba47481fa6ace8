//! # geoql - an in-memory GraphQL service over countries and cities
//!
//! Two related collections, countries and their cities, exposed through a
//! GraphQL schema. A city's `country` and a country's `cities` are not stored;
//! they are resolved against the store every time they are requested.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API (GraphiQL on GET /graphql)
//! geoql serve
//!
//! # One-off query against the built-in data
//! geoql query '{ country(id: 1) { name cities { name } } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP endpoint
//! - [`model`]: Stored records (`Country`, `City`)
//! - [`store`]: The in-memory entity store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.geoql.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `GeoError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides async-graphql schema for querying and mutating countries and cities.
pub mod graphql;

pub mod logging;

/// Data models for stored records.
pub mod model;

/// In-memory storage layer.
pub mod store;
