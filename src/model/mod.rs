//! Stored records.
//!
//! - [`Country`]: a country with a stable integer id
//! - [`City`]: a city pointing at its country through `country_id`
//!
//! Both implement [`Record`], which is all the store needs to know about them.

mod city;
mod country;

pub use city::City;
pub use country::Country;

/// A record held in a [`crate::store::Collection`].
pub trait Record: Clone {
    fn id(&self) -> i32;
}
