//! Remote product catalog client.
//!
//! # Architecture
//!
//! - The remote REST catalog is the source of truth; nothing is persisted locally
//! - Every response is decoded into an explicit schema (see [`wire`])
//! - Product snapshots are cached in memory via `moka` (LRU, fixed TTL); every
//!   listing writes its products into the cache as a side effect
//! - No retries, no fallbacks: a failed or malformed remote call is an error
//!
//! Category slugs cross this boundary in the remote (hyphen) form. Callers hand
//! in a [`CategorySlug`], which already knows both spellings.
//!
//! # Example
//!
//! ```rust,ignore
//! use the_store_gateway::catalog::CatalogClient;
//!
//! let catalog = CatalogClient::new(&config.catalog);
//! let product = catalog.product(&ProductId::new("1")).await?;
//! let page = catalog
//!     .products_by_category(&slug, &ListingOptions::default())
//!     .await?;
//! ```

pub mod cache;
pub mod categories;
pub mod wire;

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use the_store_core::{
    Category, CategorySlug, Product, ProductId, ProductPage, SortOrder, sort_by_rating_desc,
};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::config::CatalogConfig;

pub use cache::ProductCache;

use wire::{RemoteCategory, RemoteProduct, RemoteProductList};

/// Number of body characters kept when logging a failed response.
const LOGGED_BODY_CHARS: usize = 500;

/// Errors that can occur when talking to the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connection refused, reset, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Rate limited by the catalog. Not retried.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// The response did not match the endpoint's schema.
    #[error("Malformed response from {endpoint}: {reason}")]
    Malformed {
        endpoint: &'static str,
        reason: String,
    },

    /// The request URL could not be built from the configured base URL.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

impl CatalogError {
    pub(crate) fn malformed(endpoint: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            endpoint,
            reason: reason.into(),
        }
    }
}

/// Optional sort and pagination parameters for a category listing.
///
/// Each parameter is forwarded to the remote catalog only when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub sort_by: Option<String>,
    pub order: Option<SortOrder>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl ListingOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        pairs
    }
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the remote product catalog.
///
/// Cheap to clone; clones share the HTTP connection pool and the product cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: ProductCache,
    top_products_limit: u32,
}

impl CatalogClient {
    /// Create a new catalog client with an empty cache.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                cache: ProductCache::new(config.cache_capacity, config.cache_ttl),
                top_products_limit: config.top_products_limit,
            }),
        }
    }

    /// The product snapshot cache.
    #[must_use]
    pub fn cache(&self) -> &ProductCache {
        &self.inner.cache
    }

    /// Build `{base_url}/{segments...}?{query}`. Segments are percent-encoded.
    fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, CatalogError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    /// GET a URL and decode the body into `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> Result<T, CatalogError> {
        debug!(%url, endpoint, "Fetching from catalog");

        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CatalogError::RateLimited(retry_after));
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                endpoint,
                body = %body.chars().take(LOGGED_BODY_CHARS).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message: remote_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                endpoint,
                body = %body.chars().take(LOGGED_BODY_CHARS).collect::<String>(),
                "Failed to decode catalog response"
            );
            CatalogError::malformed(endpoint, e.to_string())
        })
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get a product by id, from the cache when a fresh snapshot exists.
    ///
    /// Concurrent misses for the same id are not coalesced; each one fetches.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails or the response is malformed.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        const ENDPOINT: &str = "product";

        if let Some(product) = self.inner.cache.get(id).await {
            debug!("Cache hit for product");
            return Ok(product);
        }

        let url = self.url(&["products", id.as_str()], &[])?;
        let raw: RemoteProduct = self.get_json(ENDPOINT, url).await?;
        let product = wire::convert_product(ENDPOINT, raw)?;

        self.inner.cache.insert_as(id, product.clone()).await;

        Ok(product)
    }

    /// Get the highest rated products, globally or within one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn top_products(
        &self,
        category: Option<&CategorySlug>,
    ) -> Result<Vec<Product>, CatalogError> {
        const ENDPOINT: &str = "top_products";

        let query = [
            ("limit", self.inner.top_products_limit.to_string()),
            ("sortBy", "rating".to_string()),
            ("order", SortOrder::Desc.as_str().to_string()),
        ];
        let url = match category {
            Some(slug) => self.url(&["products", "category", slug.as_remote()], &query)?,
            None => self.url(&["products"], &query)?,
        };

        let list: RemoteProductList = self.get_json(ENDPOINT, url).await?;
        let mut products = wire::convert_products(ENDPOINT, list.products)?;
        sort_by_rating_desc(&mut products);

        self.inner.cache.insert_all(&products).await;

        Ok(products)
    }

    /// Full-text product search, delegated to the remote catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        const ENDPOINT: &str = "search";

        let url = self.url(&["products", "search"], &[("q", query.to_string())])?;
        let list: RemoteProductList = self.get_json(ENDPOINT, url).await?;
        let products = wire::convert_products(ENDPOINT, list.products)?;

        self.inner.cache.insert_all(&products).await;

        Ok(products)
    }

    /// One page of a category listing, with the remote pagination numbers.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails or the response is malformed.
    #[instrument(skip(self), fields(category = %category.as_remote()))]
    pub async fn products_by_category(
        &self,
        category: &CategorySlug,
        options: &ListingOptions,
    ) -> Result<ProductPage, CatalogError> {
        const ENDPOINT: &str = "category_products";

        let url = self.url(
            &["products", "category", category.as_remote()],
            &options.query_pairs(),
        )?;
        let list: RemoteProductList = self.get_json(ENDPOINT, url).await?;
        let page = wire::convert_product_page(ENDPOINT, list)?;

        self.inner.cache.insert_all(&page.results).await;

        Ok(page)
    }

    // =========================================================================
    // Category Methods
    // =========================================================================

    /// All categories, each with its representative image.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote call fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        const ENDPOINT: &str = "categories";

        let url = self.url(&["products", "categories"], &[])?;
        let raw: Vec<RemoteCategory> = self.get_json(ENDPOINT, url).await?;

        raw.into_iter()
            .map(|c| wire::convert_category(ENDPOINT, c))
            .collect()
    }
}

/// Pull the `message` field out of an error body, falling back to the raw text.
fn remote_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map_or_else(|_| body.chars().take(200).collect(), |e| e.message)
}
