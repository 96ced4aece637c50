//! Product snapshots and paginated listings.

use serde::{Deserialize, Serialize};

use super::{CategorySlug, Price, ProductId};

/// A product snapshot as last fetched from the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog id, normalized to a string.
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Price,
    /// Average rating on a 0-5 scale.
    pub rating: f64,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub category: CategorySlug,
}

/// One page of a category listing, exactly as the remote catalog reported it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub results: Vec<Product>,
    /// Total number of products in the category, across all pages.
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

/// Sort direction forwarded to the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// The query-string value the remote catalog expects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Sort products by rating, highest first. Ties keep their original order.
pub fn sort_by_rating_desc(products: &mut [Product]) {
    products.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}
