//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::CatalogClient;
use crate::config::GatewayConfig;
use crate::graphql::{AppSchema, build_schema};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The catalog client and the cart are created
/// once here; the schema owns the cart, and HTTP handlers and resolvers share
/// the same product cache.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: GatewayConfig,
    catalog: CatalogClient,
    schema: AppSchema,
}

impl AppState {
    /// Create the application state with an empty cart and an empty cache.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        let catalog = CatalogClient::new(&config.catalog);
        let schema = build_schema(catalog.clone(), CartStore::new());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                schema,
            }),
        }
    }

    /// Get a reference to the gateway configuration.
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.inner.config
    }

    /// Get a reference to the remote catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the GraphQL schema.
    #[must_use]
    pub fn schema(&self) -> &AppSchema {
        &self.inner.schema
    }
}
