//! Mutation root.

use async_graphql::{Context, ID, Object, Result};
use the_store_core::{CartLineId, ProductId};

use super::{data, into_graphql};
use super::types::CartLineItemNode;
use crate::cart::CartStore;
use crate::error::add_breadcrumb;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Adds a product to the users shopping cart.
    async fn add_to_cart(
        &self,
        ctx: &Context<'_>,
        product_id: ID,
        quantity: i32,
    ) -> Result<CartLineItemNode> {
        let cart = data::<CartStore>(ctx)?;

        let quantity_str = quantity.to_string();
        add_breadcrumb(
            "cart",
            "Add to cart",
            Some(&[("product_id", product_id.as_str()), ("quantity", &quantity_str)]),
        );

        let item = cart
            .add_to_cart(ProductId::new(product_id.0), quantity)
            .await
            .map_err(into_graphql)?;

        Ok(CartLineItemNode(item))
    }

    /// Updates the quantity of a cart item. Setting the quantity to 0 will remove the item from the cart.
    async fn update_cart_item_quantity(
        &self,
        ctx: &Context<'_>,
        id: ID,
        quantity: i32,
    ) -> Result<Option<CartLineItemNode>> {
        let cart = data::<CartStore>(ctx)?;

        let quantity_str = quantity.to_string();
        add_breadcrumb(
            "cart",
            "Update cart item quantity",
            Some(&[("line_id", id.as_str()), ("quantity", &quantity_str)]),
        );

        let update = cart.update_quantity(&CartLineId::new(id.0), quantity).await;

        Ok(update.into_item().map(CartLineItemNode))
    }
}
