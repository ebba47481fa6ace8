//! In-memory entity store.
//!
//! ## Components
//!
//! - [`Collection`]: insertion-ordered records with a forward-only id counter
//! - [`EntityStore`]: countries and cities, plus the create/update/delete rules
//! - [`SharedStore`]: the lock-guarded handle resolvers receive through the schema context

mod collection;
mod entity_store;
mod seed;
mod shared;

pub use collection::Collection;
pub use entity_store::{CountryRemoval, EntityStore};
pub use shared::SharedStore;
