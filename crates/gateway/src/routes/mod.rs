//! HTTP route handlers for the gateway.
//!
//! # Route Structure
//!
//! ```text
//! POST /graphql       - GraphQL endpoint
//! GET  /graphql       - GraphiQL explorer
//! GET  /tools         - Tool manifest for AI agents
//! GET  /health        - Liveness check
//! GET  /health/ready  - Readiness check (remote catalog reachable)
//! ```

pub mod graphql;
pub mod health;
pub mod manifest;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create the gateway routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/graphql",
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        .route("/tools", get(manifest::tools))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Build the full application: routes, middleware, and state.
///
/// Sentry layers are added by the binary on top of this.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
