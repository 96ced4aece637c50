//! Cart line items and the joined cart view.

use serde::{Deserialize, Serialize};

use super::{CartLineId, Price, Product, ProductId};

/// One row of the cart.
///
/// A line item references its product by id only; product details are
/// hydrated from the catalog when the cart is read. Quantity is always at
/// least 1 while the row exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: CartLineId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A line item joined with its product snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartLineId,
    pub quantity: u32,
    pub product: Product,
}

impl CartItem {
    /// Join a line item with its product.
    #[must_use]
    pub fn new(line: CartLineItem, product: Product) -> Self {
        Self {
            id: line.id,
            quantity: line.quantity,
            product,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Sum of all line totals. Zero for an empty cart.
#[must_use]
pub fn subtotal(items: &[CartItem]) -> Price {
    items.iter().map(CartItem::line_total).sum()
}
