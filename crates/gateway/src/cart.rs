//! In-process cart store.
//!
//! The cart is an ordered list of line items that lives for the lifetime of
//! the process. It is created once at startup and shared through
//! [`crate::state::AppState`]; tests create their own instance.
//!
//! All mutations go through a single `RwLock`, so two concurrent
//! `add_to_cart` calls for the same product cannot lose an increment. The lock
//! is never held across a catalog call: `list_cart` snapshots the line items
//! first and hydrates products afterwards.

use std::sync::Arc;

use futures::future::try_join_all;
use the_store_core::{CartItem, CartLineId, CartLineItem, ProductId};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::catalog::{CatalogClient, CatalogError};

/// Largest quantity a line can hold; the GraphQL `Int` range.
const MAX_QUANTITY: u32 = i32::MAX.unsigned_abs();

/// Errors that can occur when mutating the cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Items can only be added in positive quantities.
    #[error("quantity must be at least 1 (got {0})")]
    InvalidQuantity(i32),
}

/// Result of a quantity update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// The line item now has the requested quantity.
    Updated(CartLineItem),
    /// The requested quantity was not positive, so the line item was removed.
    Removed,
    /// No line item has the given id. Nothing changed.
    NotFound,
}

impl QuantityUpdate {
    /// The updated line item, if one still exists.
    #[must_use]
    pub fn into_item(self) -> Option<CartLineItem> {
        match self {
            Self::Updated(item) => Some(item),
            Self::Removed | Self::NotFound => None,
        }
    }
}

#[derive(Debug, Default)]
struct CartState {
    items: Vec<CartLineItem>,
    /// Last assigned line id. Never reused, even after removals.
    last_id: u64,
}

/// Shared handle to the cart.
#[derive(Clone, Default)]
pub struct CartStore {
    state: Arc<RwLock<CartState>>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product.
    ///
    /// If the product is already in the cart its quantity is incremented and
    /// the existing line item is returned; otherwise a new line item is
    /// appended with a fresh id. Quantities saturate at `i32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is not positive.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_to_cart(
        &self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartLineItem, CartError> {
        let added = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(CartError::InvalidQuantity(quantity))?;

        let mut state = self.state.write().await;

        if let Some(existing) = state
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            existing.quantity = existing.quantity.saturating_add(added).min(MAX_QUANTITY);
            debug!(line_id = %existing.id, quantity = existing.quantity, "Incremented cart line");
            return Ok(existing.clone());
        }

        state.last_id += 1;
        let item = CartLineItem {
            id: CartLineId::from_sequence(state.last_id),
            product_id,
            quantity: added,
        };
        state.items.push(item.clone());
        debug!(line_id = %item.id, "Added cart line");

        Ok(item)
    }

    /// Set the quantity of a line item, removing it when `quantity <= 0`.
    #[instrument(skip(self), fields(line_id = %id))]
    pub async fn update_quantity(&self, id: &CartLineId, quantity: i32) -> QuantityUpdate {
        let mut state = self.state.write().await;

        let Some(index) = state.items.iter().position(|item| &item.id == id) else {
            debug!("Cart line not found");
            return QuantityUpdate::NotFound;
        };

        match u32::try_from(quantity) {
            Ok(q) if q > 0 => {
                let Some(item) = state.items.get_mut(index) else {
                    return QuantityUpdate::NotFound;
                };
                item.quantity = q;
                QuantityUpdate::Updated(item.clone())
            }
            _ => {
                state.items.remove(index);
                debug!("Removed cart line");
                QuantityUpdate::Removed
            }
        }
    }

    /// Snapshot of the line items in insertion order.
    pub async fn items(&self) -> Vec<CartLineItem> {
        self.state.read().await.items.clone()
    }

    /// Every line item joined with its product, in insertion order.
    ///
    /// Products are fetched concurrently, one catalog call per line (most are
    /// served from the product cache).
    ///
    /// # Errors
    ///
    /// Returns the first catalog error; no partial cart is returned.
    #[instrument(skip_all)]
    pub async fn list_cart(&self, catalog: &CatalogClient) -> Result<Vec<CartItem>, CatalogError> {
        let lines = self.items().await;

        let products = try_join_all(lines.iter().map(|line| catalog.product(&line.product_id))).await?;

        Ok(lines
            .into_iter()
            .zip(products)
            .map(|(line, product)| CartItem::new(line, product))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_new_product_assigns_sequential_ids() {
        let cart = CartStore::new();

        let first = cart.add_to_cart(ProductId::new("10"), 1).await.unwrap();
        let second = cart.add_to_cart(ProductId::new("20"), 2).await.unwrap();

        assert_eq!(first.id.as_str(), "1");
        assert_eq!(second.id.as_str(), "2");
        assert_eq!(second.quantity, 2);
    }

    #[tokio::test]
    async fn test_add_existing_product_increments() {
        let cart = CartStore::new();

        cart.add_to_cart(ProductId::new("5"), 2).await.unwrap();
        let line = cart.add_to_cart(ProductId::new("5"), 3).await.unwrap();

        assert_eq!(line.quantity, 5);
        let items = cart.items().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 5);
    }

    #[tokio::test]
    async fn test_repeated_add_saturates_at_int_max() {
        let cart = CartStore::new();

        cart.add_to_cart(ProductId::new("5"), i32::MAX).await.unwrap();
        let line = cart.add_to_cart(ProductId::new("5"), i32::MAX).await.unwrap();

        assert_eq!(line.quantity, MAX_QUANTITY);
        assert!(i32::try_from(line.quantity).is_ok());
    }

    #[tokio::test]
    async fn test_add_rejects_non_positive_quantity() {
        let cart = CartStore::new();

        assert_eq!(
            cart.add_to_cart(ProductId::new("5"), 0).await,
            Err(CartError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.add_to_cart(ProductId::new("5"), -2).await,
            Err(CartError::InvalidQuantity(-2))
        );
        assert!(cart.items().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_sets_quantity() {
        let cart = CartStore::new();
        let line = cart.add_to_cart(ProductId::new("5"), 1).await.unwrap();

        let update = cart.update_quantity(&line.id, 4).await;

        let updated = update.into_item().unwrap();
        assert_eq!(updated.quantity, 4);
        assert_eq!(cart.items().await[0].quantity, 4);
    }

    #[tokio::test]
    async fn test_update_to_zero_removes() {
        let cart = CartStore::new();
        let line = cart.add_to_cart(ProductId::new("5"), 1).await.unwrap();

        assert_eq!(cart.update_quantity(&line.id, 0).await, QuantityUpdate::Removed);
        assert!(cart.items().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_negative_removes() {
        let cart = CartStore::new();
        let line = cart.add_to_cart(ProductId::new("5"), 3).await.unwrap();

        assert_eq!(cart.update_quantity(&line.id, -1).await, QuantityUpdate::Removed);
        assert!(cart.items().await.is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_id_mutates_nothing() {
        let cart = CartStore::new();
        cart.add_to_cart(ProductId::new("5"), 3).await.unwrap();
        let before = cart.items().await;

        let update = cart.update_quantity(&CartLineId::new("99"), 1).await;

        assert_eq!(update, QuantityUpdate::NotFound);
        assert_eq!(cart.items().await, before);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_removal() {
        let cart = CartStore::new();
        let first = cart.add_to_cart(ProductId::new("1"), 1).await.unwrap();
        cart.update_quantity(&first.id, 0).await;

        let next = cart.add_to_cart(ProductId::new("1"), 1).await.unwrap();
        assert_eq!(next.id.as_str(), "2");
    }

    #[tokio::test]
    async fn test_insertion_order_preserved() {
        let cart = CartStore::new();
        for id in ["30", "10", "20"] {
            cart.add_to_cart(ProductId::new(id), 1).await.unwrap();
        }
        cart.add_to_cart(ProductId::new("10"), 1).await.unwrap();

        let order: Vec<String> = cart
            .items()
            .await
            .into_iter()
            .map(|item| item.product_id.into_inner())
            .collect();
        assert_eq!(order, ["30", "10", "20"]);
    }

    #[tokio::test]
    async fn test_concurrent_adds_do_not_lose_increments() {
        let cart = CartStore::new();

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let cart = cart.clone();
                tokio::spawn(async move { cart.add_to_cart(ProductId::new("7"), 1).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let items = cart.items().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 50);
    }
}
