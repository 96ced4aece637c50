//! Integration tests for the product snapshot cache behind the catalog client.
//!
//! These tests count requests reaching the fake catalog to tell cache hits
//! from remote fetches.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use the_store_core::{CategorySlug, ProductId};
use the_store_gateway::catalog::ListingOptions;
use the_store_integration_tests::FakeCatalog;

// =============================================================================
// Hits and Misses
// =============================================================================

#[tokio::test]
async fn test_second_fetch_is_served_from_cache() {
    let fake = FakeCatalog::start().await;
    let catalog = fake.client();

    let first = catalog.product(&ProductId::new("1")).await.unwrap();
    let second = catalog.product(&ProductId::new("1")).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.title, "iPhone 9");
    assert_eq!(fake.hits("/products/1"), 1);
}

#[tokio::test]
async fn test_listing_populates_cache() {
    let fake = FakeCatalog::start().await;
    let catalog = fake.client();
    let slug = CategorySlug::from_exposed("laptops").unwrap();

    catalog
        .products_by_category(&slug, &ListingOptions::default())
        .await
        .unwrap();
    let product = catalog.product(&ProductId::new("7")).await.unwrap();

    assert_eq!(product.title, "MacBook Pro");
    assert_eq!(fake.hits("/products/7"), 0);
}

#[tokio::test]
async fn test_search_and_top_products_populate_cache() {
    let fake = FakeCatalog::start().await;
    let catalog = fake.client();

    catalog.search("iphone").await.unwrap();
    catalog.top_products(None).await.unwrap();
    catalog.product(&ProductId::new("2")).await.unwrap();
    catalog.product(&ProductId::new("10")).await.unwrap();

    assert_eq!(fake.hits("/products/2"), 0);
    assert_eq!(fake.hits("/products/10"), 0);
}

#[tokio::test]
async fn test_padded_id_is_cached_under_requested_id() {
    let fake = FakeCatalog::start().await;
    let catalog = fake.client();

    let product = catalog.product(&ProductId::new("01")).await.unwrap();
    assert_eq!(product.id, ProductId::new("1"));

    catalog.product(&ProductId::new("01")).await.unwrap();
    catalog.product(&ProductId::new("1")).await.unwrap();

    assert_eq!(fake.hits("/products/01"), 1);
    assert_eq!(fake.hits("/products/1"), 0);
}

// =============================================================================
// Eviction and Expiry
// =============================================================================

#[tokio::test]
async fn test_least_recently_used_product_is_refetched() {
    let fake = FakeCatalog::start().await;
    let catalog = fake.client_with_cache(2, Duration::from_secs(60));

    catalog.product(&ProductId::new("1")).await.unwrap();
    catalog.product(&ProductId::new("2")).await.unwrap();
    // Touch 1 so that 2 is the least recently used.
    catalog.product(&ProductId::new("1")).await.unwrap();
    catalog.product(&ProductId::new("3")).await.unwrap();

    catalog.product(&ProductId::new("1")).await.unwrap();
    catalog.product(&ProductId::new("2")).await.unwrap();

    assert_eq!(fake.hits("/products/1"), 1);
    assert_eq!(fake.hits("/products/2"), 2);
}

#[tokio::test]
async fn test_listing_larger_than_capacity_stays_bounded() {
    let fake = FakeCatalog::start().await;
    let catalog = fake.client_with_cache(3, Duration::from_secs(60));

    let products = catalog.top_products(None).await.unwrap();

    assert_eq!(products.len(), 10);
    assert!(catalog.cache().entry_count() <= 3);
}

#[tokio::test]
async fn test_expired_product_is_refetched() {
    let fake = FakeCatalog::start().await;
    let catalog = fake.client_with_cache(10, Duration::from_millis(50));

    catalog.product(&ProductId::new("4")).await.unwrap();
    catalog.product(&ProductId::new("4")).await.unwrap();
    assert_eq!(fake.hits("/products/4"), 1);

    tokio::time::sleep(Duration::from_millis(120)).await;

    catalog.product(&ProductId::new("4")).await.unwrap();
    assert_eq!(fake.hits("/products/4"), 2);
}
