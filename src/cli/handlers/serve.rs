use anyhow::Result;
use colored::Colorize;

use crate::graphql::{GRAPHQL_PATH, run_server, schema_from_config};

use super::CommandContext;

pub fn handle_serve(mut ctx: CommandContext, port: Option<u16>, host: Option<String>) -> Result<()> {
    if let Some(port) = port {
        ctx.config.server.port = port;
    }
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    ctx.config.validate()?;

    let schema = schema_from_config(&ctx.config);
    let addr = ctx.config.bind_address();
    let graphiql = ctx.config.server.graphiql;

    println!(
        "{} http://{}{}",
        "Starting GraphQL server on".green(),
        addr,
        GRAPHQL_PATH
    );

    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, &addr, graphiql).await })?;
    Ok(())
}
