//! HTTP routes served by `geoql serve`.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use geoql::graphql::{GRAPHQL_PATH, build_schema, router};
use geoql::store::{EntityStore, SharedStore};
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot

fn app(graphiql: bool) -> axum::Router {
    router(
        build_schema(SharedStore::new(EntityStore::seeded())),
        graphiql,
    )
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app
        .oneshot(request)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    (status, String::from_utf8(body.to_vec()).expect("Invalid UTF-8"))
}

fn get_graphql() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(GRAPHQL_PATH)
        .body(Body::empty())
        .unwrap()
}

fn post_graphql(query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(GRAPHQL_PATH)
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({ "query": query })).unwrap(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_get_serves_graphiql_when_enabled() {
    let (status, body) = send(app(true), get_graphql()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn test_get_not_allowed_when_graphiql_disabled() {
    let (status, _) = send(app(false), get_graphql()).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_post_executes_nested_query() {
    for graphiql in [true, false] {
        let (status, body) = send(
            app(graphiql),
            post_graphql("{ countries { name cities { name country { cities { id } } } } }"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let response: Value = serde_json::from_str(&body).unwrap();
        assert!(response.get("errors").is_none());
        let countries = response["data"]["countries"].as_array().unwrap();
        assert_eq!(countries.len(), 3);
        assert_eq!(countries[1]["name"], json!("France"));
        assert_eq!(
            countries[1]["cities"][0],
            json!({ "name": "Paris", "country": { "cities": [{ "id": 2 }, { "id": 5 }] } })
        );
    }
}

#[tokio::test]
async fn test_post_mutation_error_is_reported() {
    let (status, body) = send(app(false), post_graphql("mutation { deleteCity(id: 99) { id } }")).await;
    assert_eq!(status, StatusCode::OK);

    let response: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["errors"][0]["message"], json!("City not found"));
}
