//! Product snapshot cache.
//!
//! A bounded `moka` cache keyed by product id. Entries expire a fixed time
//! after they were written, whether or not they were read in between. Once
//! the cache is over capacity the least-recently-used entry is evicted.
//!
//! The cache is best-effort: it is never the source of truth, and two
//! concurrent misses for the same id simply both fetch and both write.

use std::time::Duration;

use moka::future::Cache;
use moka::policy::EvictionPolicy;
use the_store_core::{Product, ProductId};

/// Cache of product snapshots, cheap to clone.
#[derive(Clone)]
pub struct ProductCache {
    inner: Cache<ProductId, Product>,
}

impl ProductCache {
    /// Create a cache holding at most `capacity` products for `ttl` each.
    #[must_use]
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .eviction_policy(EvictionPolicy::lru())
            .build();

        Self { inner }
    }

    /// Look up a product. Counts as a use for LRU ordering.
    pub async fn get(&self, id: &ProductId) -> Option<Product> {
        let hit = self.inner.get(id).await;
        // moka buffers reads; apply them so recency is current before the next eviction.
        self.inner.run_pending_tasks().await;
        hit
    }

    /// Store a product snapshot under its own id, replacing any previous one.
    pub async fn insert(&self, product: Product) {
        self.inner.insert(product.id.clone(), product).await;
        self.inner.run_pending_tasks().await;
    }

    /// Store a product snapshot under the id it was requested by.
    ///
    /// The remote accepts ids it normalizes (`"01"` is product `1`), so a
    /// lookup by the requested id should hit as well as one by the canonical id.
    pub async fn insert_as(&self, requested: &ProductId, product: Product) {
        if *requested != product.id {
            self.inner.insert(requested.clone(), product.clone()).await;
        }
        self.insert(product).await;
    }

    /// Store every product of a listing.
    pub async fn insert_all(&self, products: &[Product]) {
        for product in products {
            self.inner.insert(product.id.clone(), product.clone()).await;
        }
        self.inner.run_pending_tasks().await;
    }

    /// Whether an unexpired snapshot for `id` is present. Does not count as a use.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.inner.contains_key(id)
    }

    /// Number of entries, including any evicted by the last write.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}
