//! The Store Core - Shared domain types.
//!
//! This crate provides the domain types used by the catalog gateway:
//! - Products and paginated product listings as reported by the remote catalog
//! - Categories and the slug translation between the remote and exposed forms
//! - Cart line items and the joined cart view
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no caches. This keeps it lightweight and trivially testable.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, prices, category slugs, products, and cart items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
