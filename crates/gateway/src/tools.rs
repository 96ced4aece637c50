//! Tool metadata for AI agents.
//!
//! Each UI operation is published as a "tool": a human-readable name and
//! description plus the GraphQL field it maps to. An agent framework reads the
//! manifest from `GET /tools` and translates user intents into these
//! operations; the same descriptions appear as field docs in the schema.

use serde::Serialize;

/// Whether a tool reads or changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Query,
    Mutation,
}

/// One invocable tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Root field of the GraphQL schema this tool invokes.
    pub operation: &'static str,
    pub kind: ToolKind,
    /// The UI loads this operation ahead of navigation.
    pub prefetch: bool,
}

pub const TOP_PRODUCTS_DESC: &str = "Shows the currently highest rated products.";
pub const PRODUCT_DESC: &str = "Shows the details page for a specific product.";
pub const SEARCH_DESC: &str = "Searches for products based on a search query.";
pub const PRODUCTS_DESC: &str =
    "Shows products in a specific category with sorting and pagination options.";
pub const CART_DESC: &str = "Shows the items currently added to the user's shopping cart.";
pub const ADD_TO_CART_DESC: &str = "Adds a product to the users shopping cart.";
pub const UPDATE_CART_ITEM_QUANTITY_DESC: &str = "Updates the quantity of a cart item. Setting the quantity to 0 will remove the item from the cart.";

/// Every published tool.
pub const TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "Top Products",
        description: TOP_PRODUCTS_DESC,
        operation: "topProducts",
        kind: ToolKind::Query,
        prefetch: true,
    },
    ToolDescriptor {
        name: "Get Product",
        description: PRODUCT_DESC,
        operation: "product",
        kind: ToolKind::Query,
        prefetch: false,
    },
    ToolDescriptor {
        name: "Search Products",
        description: SEARCH_DESC,
        operation: "search",
        kind: ToolKind::Query,
        prefetch: false,
    },
    ToolDescriptor {
        name: "Browse Products",
        description: PRODUCTS_DESC,
        operation: "products",
        kind: ToolKind::Query,
        prefetch: false,
    },
    ToolDescriptor {
        name: "View Cart",
        description: CART_DESC,
        operation: "cart",
        kind: ToolKind::Query,
        prefetch: false,
    },
    ToolDescriptor {
        name: "Add to Cart",
        description: ADD_TO_CART_DESC,
        operation: "addToCart",
        kind: ToolKind::Mutation,
        prefetch: false,
    },
    ToolDescriptor {
        name: "Update cart item quantity",
        description: UPDATE_CART_ITEM_QUANTITY_DESC,
        operation: "updateCartItemQuantity",
        kind: ToolKind::Mutation,
        prefetch: false,
    },
];
