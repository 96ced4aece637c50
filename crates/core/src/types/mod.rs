//! Core types for The Store.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod category;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{CartItem, CartLineItem, subtotal};
pub use category::{Category, CategorySlug, CategorySlugError};
pub use id::*;
pub use price::Price;
pub use product::{Product, ProductPage, SortOrder, sort_by_rating_desc};
