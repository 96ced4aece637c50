//! Response schemas for the remote catalog REST API.
//!
//! Each endpoint gets an explicit schema. Required fields are not defaulted, so
//! a response with the wrong shape fails to decode instead of leaking empty
//! values into the schema. Conversion into the core types happens here too,
//! which is where remote ids become strings and slugs are validated.

use serde::Deserialize;
use the_store_core::{Category, CategorySlug, Price, Product, ProductId, ProductPage};

use super::CatalogError;
use super::categories::image_for;

/// `GET /products/{id}` and the elements of every product listing.
#[derive(Debug, Deserialize)]
pub struct RemoteProduct {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    pub rating: f64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: String,
}

/// `GET /products`, `GET /products/category/{slug}`, `GET /products/search`.
#[derive(Debug, Deserialize)]
pub struct RemoteProductList {
    pub products: Vec<RemoteProduct>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

/// Elements of `GET /products/categories`.
#[derive(Debug, Deserialize)]
pub struct RemoteCategory {
    pub slug: String,
    pub name: String,
}

// =============================================================================
// Conversions
// =============================================================================

/// Convert a remote product into the core type.
pub fn convert_product(endpoint: &'static str, raw: RemoteProduct) -> Result<Product, CatalogError> {
    let category = CategorySlug::from_remote(&raw.category)
        .map_err(|e| CatalogError::malformed(endpoint, format!("product {}: {e}", raw.id)))?;

    Ok(Product {
        id: ProductId::from_remote(raw.id),
        title: raw.title,
        description: raw.description,
        price: raw.price,
        rating: raw.rating,
        thumbnail: raw.thumbnail,
        images: raw.images,
        category,
    })
}

/// Convert every product of a listing, failing on the first bad element.
pub fn convert_products(
    endpoint: &'static str,
    raw: Vec<RemoteProduct>,
) -> Result<Vec<Product>, CatalogError> {
    raw.into_iter()
        .map(|p| convert_product(endpoint, p))
        .collect()
}

/// Convert a listing into a page, keeping the remote pagination numbers as-is.
pub fn convert_product_page(
    endpoint: &'static str,
    raw: RemoteProductList,
) -> Result<ProductPage, CatalogError> {
    Ok(ProductPage {
        results: convert_products(endpoint, raw.products)?,
        total: raw.total,
        skip: raw.skip,
        limit: raw.limit,
    })
}

/// Convert a remote category, attaching the locally known image.
pub fn convert_category(endpoint: &'static str, raw: RemoteCategory) -> Result<Category, CatalogError> {
    let slug = CategorySlug::from_remote(&raw.slug)
        .map_err(|e| CatalogError::malformed(endpoint, format!("category {:?}: {e}", raw.slug)))?;
    let image = image_for(&slug);

    Ok(Category {
        slug,
        name: raw.name,
        image,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "id": 1,
        "title": "Essence Mascara Lash Princess",
        "description": "A popular mascara.",
        "category": "beauty",
        "price": 9.99,
        "rating": 2.56,
        "stock": 99,
        "thumbnail": "https://cdn.dummyjson.com/product-images/beauty/essence-mascara-lash-princess/thumbnail.webp",
        "images": ["https://cdn.dummyjson.com/product-images/beauty/essence-mascara-lash-princess/1.webp"]
    }"#;

    #[test]
    fn test_convert_product() {
        let raw: RemoteProduct = serde_json::from_str(PRODUCT_JSON).unwrap();
        let product = convert_product("product", raw).unwrap();

        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.price, Price::from_cents(999));
        assert_eq!(product.category.to_exposed(), "beauty");
        assert_eq!(product.images.len(), 1);
    }

    #[test]
    fn test_missing_required_field_fails_to_decode() {
        let result = serde_json::from_str::<RemoteProduct>(r#"{"id": 1, "title": "No price"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let raw: RemoteProduct = serde_json::from_str(
            r#"{"id": 2, "title": "Bare", "price": 1, "rating": 4.0, "category": "home-decoration"}"#,
        )
        .unwrap();
        let product = convert_product("product", raw).unwrap();
        assert!(product.description.is_empty());
        assert!(product.images.is_empty());
        assert_eq!(product.category.to_exposed(), "home_decoration");
    }

    #[test]
    fn test_bad_category_slug_is_malformed() {
        let raw: RemoteProduct = serde_json::from_str(
            r#"{"id": 3, "title": "Odd", "price": 1, "rating": 1.0, "category": "not a slug"}"#,
        )
        .unwrap();
        let err = convert_product("product", raw).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { endpoint: "product", .. }));
    }

    #[test]
    fn test_convert_category_known_and_unknown_image() {
        let known = convert_category(
            "categories",
            RemoteCategory {
                slug: "home-decoration".to_string(),
                name: "Home Decoration".to_string(),
            },
        )
        .unwrap();
        assert_eq!(known.slug.to_exposed(), "home_decoration");
        assert!(known.image.ends_with("house-showpiece-plant/thumbnail.webp"));

        let unknown = convert_category(
            "categories",
            RemoteCategory {
                slug: "garden-tools".to_string(),
                name: "Garden Tools".to_string(),
            },
        )
        .unwrap();
        assert_eq!(unknown.image, "");
    }
}
