use anyhow::Result;
use colored::Colorize;

use crate::config::{CONFIG_FILE_NAME, GeoConfig};
use crate::error::GeoError;

use super::CommandContext;

pub fn handle_init(ctx: CommandContext) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(GeoError::AlreadyInitialized(path.display().to_string()).into());
    }

    GeoConfig::default().save(&path)?;
    println!("{} {}", "Initialized".green(), path.display());
    Ok(())
}
