mod execute;
mod init;
mod schema;
mod serve;

pub use execute::{handle_mutate, handle_query};
pub use init::handle_init;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::GeoConfig;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: GeoConfig,
    pub cwd: PathBuf,
}

impl CommandContext {
    pub fn new(config: GeoConfig, cwd: PathBuf) -> Self {
        Self { config, cwd }
    }
}
