use anyhow::Result;

use crate::graphql::schema_from_config;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    print!("{}", schema_from_config(&ctx.config).sdl());
    Ok(())
}
