//! Query root.

use async_graphql::{Context, ID, Object, Result};
use the_store_core::{ProductId, subtotal};
use tracing::debug;

use super::types::{CartItemNode, CategoryArg, CategoryNode, Order, ProductNode, ProductPageNode};
use super::{category_slug, data, into_graphql};
use crate::cart::CartStore;
use crate::catalog::{CatalogClient, ListingOptions};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Shows the currently highest rated products.
    async fn top_products(
        &self,
        ctx: &Context<'_>,
        category: Option<CategoryArg>,
    ) -> Result<Vec<ProductNode>> {
        let catalog = data::<CatalogClient>(ctx)?;
        let category = category
            .map(category_slug)
            .transpose()
            .map_err(into_graphql)?;

        let products = catalog
            .top_products(category.as_ref())
            .await
            .map_err(into_graphql)?;

        Ok(products.into_iter().map(ProductNode).collect())
    }

    /// Shows the details page for a specific product.
    async fn product(&self, ctx: &Context<'_>, id: ID) -> Result<ProductNode> {
        let catalog = data::<CatalogClient>(ctx)?;

        let product = catalog
            .product(&ProductId::new(id.0))
            .await
            .map_err(into_graphql)?;

        Ok(ProductNode(product))
    }

    /// Searches for products based on a search query.
    async fn search(&self, ctx: &Context<'_>, query: String) -> Result<Vec<ProductNode>> {
        let catalog = data::<CatalogClient>(ctx)?;

        let products = catalog.search(&query).await.map_err(into_graphql)?;

        Ok(products.into_iter().map(ProductNode).collect())
    }

    /// Shows products in a specific category with sorting and pagination options.
    async fn products(
        &self,
        ctx: &Context<'_>,
        category: CategoryArg,
        sort_by: Option<String>,
        order: Option<Order>,
        limit: Option<u32>,
        skip: Option<u32>,
    ) -> Result<ProductPageNode> {
        let catalog = data::<CatalogClient>(ctx)?;
        let category = category_slug(category).map_err(into_graphql)?;

        let options = ListingOptions {
            sort_by,
            order: order.map(Into::into),
            limit,
            skip,
        };
        let page = catalog
            .products_by_category(&category, &options)
            .await
            .map_err(into_graphql)?;

        Ok(ProductPageNode(page))
    }

    /// Shows the items currently added to the user's shopping cart.
    async fn cart(&self, ctx: &Context<'_>) -> Result<Vec<CartItemNode>> {
        let catalog = data::<CatalogClient>(ctx)?;
        let cart = data::<CartStore>(ctx)?;

        let items = cart.list_cart(catalog).await.map_err(into_graphql)?;
        debug!(lines = items.len(), subtotal = %subtotal(&items), "Listed cart");

        Ok(items.into_iter().map(CartItemNode).collect())
    }

    /// Lists every product category with its representative image.
    async fn categories(&self, ctx: &Context<'_>) -> Result<Vec<CategoryNode>> {
        let catalog = data::<CatalogClient>(ctx)?;

        let categories = catalog.categories().await.map_err(into_graphql)?;

        Ok(categories.into_iter().map(CategoryNode).collect())
    }
}
