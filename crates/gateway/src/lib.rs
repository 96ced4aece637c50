//! The Store catalog gateway library.
//!
//! A GraphQL facade over a remote product catalog, with an in-memory product
//! cache and an in-process shopping cart. The binary in `main.rs` wires these
//! together; integration tests use the library directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod tools;
