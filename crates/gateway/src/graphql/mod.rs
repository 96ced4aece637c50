//! GraphQL schema for the storefront UI.
//!
//! Every root field corresponds to one entry in [`crate::tools::TOOLS`] and
//! carries the same description, so agents reading the schema and agents
//! reading `GET /tools` see identical wording.
//!
//! Resolvers pull their dependencies from schema data: a [`CatalogClient`]
//! and a [`CartStore`], registered once in [`build_schema`].

pub mod mutation;
pub mod query;
pub mod types;

use std::any::Any;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, Schema};
use the_store_core::CategorySlug;

use crate::cart::CartStore;
use crate::catalog::CatalogClient;
use crate::error::AppError;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
use types::CategoryArg;

/// The gateway's executable schema.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around a catalog client and a cart.
#[must_use]
pub fn build_schema(catalog: CatalogClient, cart: CartStore) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .data(cart)
        .finish()
}

/// Classify a failure and convert it into a GraphQL error.
fn into_graphql(err: impl Into<AppError>) -> async_graphql::Error {
    err.into().extend()
}

/// Schema data registered in [`build_schema`].
fn data<'a, D: Any + Send + Sync>(ctx: &Context<'a>) -> async_graphql::Result<&'a D> {
    ctx.data::<D>()
        .map_err(|e| into_graphql(AppError::Internal(e.message)))
}

/// Resolve a category argument to the slug the catalog understands.
fn category_slug(category: CategoryArg) -> crate::error::Result<CategorySlug> {
    CategorySlug::from_remote(category.remote_slug()).map_err(|e| AppError::Internal(e.to_string()))
}
