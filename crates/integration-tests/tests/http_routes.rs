//! Integration tests for the gateway's HTTP surface.
//!
//! Each test serves the full router on an ephemeral port and talks to it with
//! `reqwest`, the way the storefront UI does.

#![allow(clippy::unwrap_used)]

use serde_json::{Value, json};
use the_store_integration_tests::{FakeCatalog, Mode};

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let fake = FakeCatalog::start().await;
    let base = fake.spawn_gateway().await;

    let response = reqwest::get(format!("{base}/health")).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_readiness_follows_catalog() {
    let fake = FakeCatalog::start().await;
    let base = fake.spawn_gateway().await;

    let response = reqwest::get(format!("{base}/health/ready")).await.unwrap();
    assert_eq!(response.status(), 200);

    fake.set_mode(Mode::ServerError);
    let response = reqwest::get(format!("{base}/health/ready")).await.unwrap();
    assert_eq!(response.status(), 503);
}

// =============================================================================
// Tools
// =============================================================================

#[tokio::test]
async fn test_tool_manifest() {
    let fake = FakeCatalog::start().await;
    let base = fake.spawn_gateway().await;

    let manifest: Value = reqwest::get(format!("{base}/tools"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(manifest["endpoint"], "/graphql");
    let tools = manifest["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 7);
    assert_eq!(
        tools[0],
        json!({
            "name": "Top Products",
            "description": "Shows the currently highest rated products.",
            "operation": "topProducts",
            "kind": "query",
            "prefetch": true,
        })
    );
    let update = tools
        .iter()
        .find(|t| t["operation"] == "updateCartItemQuantity")
        .unwrap();
    assert_eq!(update["kind"], "mutation");
    assert_eq!(update["name"], "Update cart item quantity");
}

// =============================================================================
// GraphQL
// =============================================================================

#[tokio::test]
async fn test_graphql_post() {
    let fake = FakeCatalog::start().await;
    let base = fake.spawn_gateway().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(format!("{base}/graphql"))
        .json(&json!({
            "query": "mutation Add($id: ID!) { addToCart(productId: $id, quantity: 1) { id quantity } }",
            "operationName": "Add",
            "variables": { "id": "3" },
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["addToCart"]["quantity"], 1);

    // The cart is shared across requests.
    let body: Value = client
        .post(format!("{base}/graphql"))
        .json(&json!({ "query": "{ cart { quantity product { title } } }" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["cart"][0]["product"]["title"], "Samsung Universe 9");
}

#[tokio::test]
async fn test_graphiql_page() {
    let fake = FakeCatalog::start().await;
    let base = fake.spawn_gateway().await;

    let response = reqwest::get(format!("{base}/graphql")).await.unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(response.text().await.unwrap().contains("graphiql"));
}

// =============================================================================
// Middleware
// =============================================================================

#[tokio::test]
async fn test_request_id_is_echoed() {
    let fake = FakeCatalog::start().await;
    let base = fake.spawn_gateway().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/health"))
        .header("x-request-id", "ui-123")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "ui-123");

    let response = client.get(format!("{base}/health")).send().await.unwrap();
    let generated = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(generated.len(), 36);
}

#[tokio::test]
async fn test_cors_allows_browser_origin() {
    let fake = FakeCatalog::start().await;
    let base = fake.spawn_gateway().await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/graphql"))
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}
