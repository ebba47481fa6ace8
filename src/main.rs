use anyhow::{Context, Result};
use clap::Parser;

use geoql::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use geoql::cli::{Cli, Commands};
use geoql::config::GeoConfig;
use geoql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;
    let config = match &cli.config {
        Some(path) => GeoConfig::load_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GeoConfig::discover(&cwd).context("Failed to load geoql configuration")?,
    };
    let ctx = CommandContext::new(config, cwd);

    match cli.command {
        Commands::Init => handle_init(ctx),
        Commands::Serve { port, host } => handle_serve(ctx, port, host),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
