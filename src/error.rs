use std::fmt;

use thiserror::Error;

/// The kind of record an operation was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    City,
    Country,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::City => write!(f, "City"),
            EntityKind::Country => write!(f, "Country"),
        }
    }
}

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("Country is still referenced by {cities} cities")]
    Referenced { country_id: i32, cities: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
