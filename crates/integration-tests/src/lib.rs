//! Integration tests for The Store gateway.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p the-store-integration-tests
//! ```
//!
//! No network access is needed. Each test starts a [`FakeCatalog`], an axum
//! server on an ephemeral port that speaks the remote catalog's REST dialect
//! over a small fixed dataset, and points the gateway at it.
//!
//! # Test Categories
//!
//! - `catalog_*` - Catalog client, cache, and error propagation
//! - `cart_flow` - Cart store hydrated through the catalog
//! - `graphql_api` - Schema execution end to end
//! - `http_routes` - The gateway's HTTP surface over a real socket

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::cmp::Ordering;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use the_store_gateway::catalog::CatalogClient;
use the_store_gateway::config::{CatalogConfig, GatewayConfig, LogFormat};
use the_store_gateway::routes;
use the_store_gateway::state::AppState;
use url::Url;

/// How the fake catalog answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Serve the fixture dataset.
    Healthy,
    /// Every request fails with HTTP 500.
    ServerError,
    /// Every request answers 200 with a body of the wrong shape.
    Malformed,
    /// Every request answers 429 with `Retry-After: 7`.
    RateLimited,
}

struct FakeState {
    products: Vec<Value>,
    requests: Mutex<Vec<String>>,
    mode: Mutex<Mode>,
}

/// A fake remote catalog listening on `127.0.0.1`.
pub struct FakeCatalog {
    addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeCatalog {
    /// Start serving the fixture dataset.
    pub async fn start() -> Self {
        let state = Arc::new(FakeState {
            products: fixture_products(),
            requests: Mutex::new(Vec::new()),
            mode: Mutex::new(Mode::Healthy),
        });

        let app = Router::new()
            .route("/products", get(list_all))
            .route("/products/search", get(search))
            .route("/products/categories", get(categories))
            .route("/products/category/{slug}", get(list_category))
            .route("/products/{id}", get(product))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    /// Base URL to configure the gateway with.
    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).unwrap()
    }

    /// Switch how subsequent requests are answered.
    pub fn set_mode(&self, mode: Mode) {
        *self.state.mode.lock().unwrap() = mode;
    }

    /// Every request path (with query) received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Number of requests for exactly `path`, ignoring the query string.
    #[must_use]
    pub fn hits(&self, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.split('?').next() == Some(path))
            .count()
    }

    /// Catalog configuration pointing at this server.
    #[must_use]
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::new(self.base_url())
    }

    /// Catalog client with the given cache settings.
    #[must_use]
    pub fn client_with_cache(&self, capacity: u64, ttl: Duration) -> CatalogClient {
        let mut config = self.catalog_config();
        config.cache_capacity = capacity;
        config.cache_ttl = ttl;
        CatalogClient::new(&config)
    }

    /// Catalog client with the default cache settings.
    #[must_use]
    pub fn client(&self) -> CatalogClient {
        CatalogClient::new(&self.catalog_config())
    }

    /// Gateway configuration pointing at this server.
    #[must_use]
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            host: [127, 0, 0, 1].into(),
            port: 0,
            catalog: self.catalog_config(),
            log_format: LogFormat::Pretty,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }

    /// Serve the full gateway against this catalog. Returns its base URL.
    pub async fn spawn_gateway(&self) -> String {
        let app = routes::app(AppState::new(self.gateway_config()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListParams {
    limit: Option<usize>,
    skip: Option<usize>,
    sort_by: Option<String>,
    order: Option<String>,
    q: Option<String>,
}

impl FakeState {
    /// Record the request and return the canned failure for the current mode.
    fn enter(&self, uri: &Uri) -> Option<Response> {
        let path = uri
            .path_and_query()
            .map_or_else(|| uri.path().to_string(), ToString::to_string);
        self.requests.lock().unwrap().push(path);

        match *self.mode.lock().unwrap() {
            Mode::Healthy => None,
            Mode::ServerError => Some(
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "database on fire" })),
                )
                    .into_response(),
            ),
            Mode::Malformed => Some(Json(json!({ "unexpected": true })).into_response()),
            Mode::RateLimited => Some(
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    [(header::RETRY_AFTER, "7")],
                    "slow down",
                )
                    .into_response(),
            ),
        }
    }
}

async fn list_all(
    State(state): State<Arc<FakeState>>,
    uri: Uri,
    Query(params): Query<ListParams>,
) -> Response {
    if let Some(failure) = state.enter(&uri) {
        return failure;
    }
    Json(listing(state.products.clone(), &params)).into_response()
}

async fn list_category(
    State(state): State<Arc<FakeState>>,
    uri: Uri,
    Path(slug): Path<String>,
    Query(params): Query<ListParams>,
) -> Response {
    if let Some(failure) = state.enter(&uri) {
        return failure;
    }
    let products = state
        .products
        .iter()
        .filter(|p| p["category"] == slug.as_str())
        .cloned()
        .collect();
    Json(listing(products, &params)).into_response()
}

async fn search(
    State(state): State<Arc<FakeState>>,
    uri: Uri,
    Query(params): Query<ListParams>,
) -> Response {
    if let Some(failure) = state.enter(&uri) {
        return failure;
    }
    let needle = params.q.clone().unwrap_or_default().to_lowercase();
    let products = state
        .products
        .iter()
        .filter(|p| {
            p["title"]
                .as_str()
                .is_some_and(|t| t.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    Json(listing(products, &params)).into_response()
}

async fn product(
    State(state): State<Arc<FakeState>>,
    uri: Uri,
    Path(id): Path<String>,
) -> Response {
    if let Some(failure) = state.enter(&uri) {
        return failure;
    }
    // The remote parses ids as integers, so "01" finds product 1.
    let wanted = id.parse::<u64>().ok();
    state
        .products
        .iter()
        .find(|p| wanted.is_some() && p["id"].as_u64() == wanted)
        .map_or_else(
            || {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": format!("Product with id '{id}' not found") })),
                )
                    .into_response()
            },
            |p| Json(p.clone()).into_response(),
        )
}

async fn categories(State(state): State<Arc<FakeState>>, uri: Uri) -> Response {
    if let Some(failure) = state.enter(&uri) {
        return failure;
    }
    let list: Vec<Value> = [
        ("smartphones", "Smartphones"),
        ("laptops", "Laptops"),
        ("home-decoration", "Home Decoration"),
        ("groceries", "Groceries"),
        ("mystery-box", "Mystery Box"),
    ]
    .iter()
    .map(|(slug, name)| {
        json!({
            "slug": slug,
            "name": name,
            "url": format!("https://dummyjson.com/products/category/{slug}"),
        })
    })
    .collect();
    Json(list).into_response()
}

/// Sort and paginate like the remote catalog: `total` counts the whole set.
fn listing(mut products: Vec<Value>, params: &ListParams) -> Value {
    if let Some(field) = &params.sort_by {
        products.sort_by(|a, b| compare_field(&a[field.as_str()], &b[field.as_str()]));
        if params.order.as_deref() == Some("desc") {
            products.reverse();
        }
    }

    let total = products.len();
    let skip = params.skip.unwrap_or(0);
    let limit = params.limit.unwrap_or(30);
    let page: Vec<Value> = products.into_iter().skip(skip).take(limit).collect();

    json!({
        "products": page,
        "total": total,
        "skip": skip,
        "limit": limit,
    })
}

fn compare_field(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.as_str().unwrap_or_default().cmp(b.as_str().unwrap_or_default()),
    }
}

// =============================================================================
// Fixtures
// =============================================================================

fn fixture_product(id: u64, title: &str, price: f64, rating: f64, category: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{title} description"),
        "category": category,
        "price": price,
        "discountPercentage": 5.5,
        "rating": rating,
        "stock": 20,
        "tags": [category],
        "thumbnail": format!("https://cdn.example.com/{id}/thumbnail.webp"),
        "images": [format!("https://cdn.example.com/{id}/1.webp")],
    })
}

fn fixture_products() -> Vec<Value> {
    vec![
        fixture_product(1, "iPhone 9", 549.0, 4.69, "smartphones"),
        fixture_product(2, "iPhone X", 899.0, 4.44, "smartphones"),
        fixture_product(3, "Samsung Universe 9", 1249.0, 4.09, "smartphones"),
        fixture_product(4, "OPPOF19", 280.0, 4.3, "smartphones"),
        fixture_product(5, "Huawei P30", 499.0, 4.12, "smartphones"),
        fixture_product(6, "Galaxy S8", 699.99, 3.9, "smartphones"),
        fixture_product(7, "MacBook Pro", 1749.0, 4.57, "laptops"),
        fixture_product(8, "Surface Laptop 4", 1499.0, 4.43, "laptops"),
        fixture_product(9, "Plant Hanger For Home", 41.0, 4.08, "home-decoration"),
        fixture_product(10, "Flying Wooden Bird", 51.0, 4.41, "home-decoration"),
        fixture_product(11, "Apple", 1.99, 4.19, "groceries"),
    ]
}

/// Number of fixture products in `smartphones`.
pub const SMARTPHONE_COUNT: u32 = 6;
