use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::{get, post_service},
};
use tracing::info;

use crate::error::Result;

use super::GeoSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// `POST /graphql` executes operations; `GET /graphql` serves GraphiQL when enabled.
pub fn router(schema: GeoSchema, graphiql_enabled: bool) -> Router {
    let route = if graphiql_enabled {
        get(graphiql).post_service(GraphQL::new(schema))
    } else {
        post_service(GraphQL::new(schema))
    };
    Router::new().route(GRAPHQL_PATH, route)
}

pub async fn run_server(schema: GeoSchema, addr: &str, graphiql_enabled: bool) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    info!("GraphQL endpoint: http://{}{}", local, GRAPHQL_PATH);
    if graphiql_enabled {
        info!("GraphiQL explorer: http://{}{}", local, GRAPHQL_PATH);
    }

    axum::serve(listener, router(schema, graphiql_enabled)).await?;
    Ok(())
}
