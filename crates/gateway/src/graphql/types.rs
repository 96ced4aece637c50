//! GraphQL object and enum types.
//!
//! Thin wrappers over the domain types in `the_store_core`. They decide how a
//! value is spelled on the wire: decimal prices become `Float`, category slugs
//! use the underscore form, and ids become `ID`.

use async_graphql::{Enum, ID, Object};
use the_store_core::{CartItem, CartLineItem, Category, Product, ProductPage, SortOrder};

/// Sort direction for product listings.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(rename_items = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl From<Order> for SortOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Asc => Self::Asc,
            Order::Desc => Self::Desc,
        }
    }
}

/// Catalog category accepted as an argument, spelled with underscores.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "Category", rename_items = "snake_case")]
pub enum CategoryArg {
    Beauty,
    Fragrances,
    Furniture,
    Groceries,
    HomeDecoration,
    KitchenAccessories,
    Laptops,
    MensShirts,
    MensShoes,
    MensWatches,
    MobileAccessories,
    Motorcycle,
    SkinCare,
    Smartphones,
    SportsAccessories,
    Sunglasses,
    Tablets,
    Tops,
    Vehicle,
    WomensBags,
    WomensDresses,
    WomensJewellery,
    WomensShoes,
    WomensWatches,
}

impl CategoryArg {
    /// The slug as the remote catalog spells it.
    #[must_use]
    pub const fn remote_slug(self) -> &'static str {
        match self {
            Self::Beauty => "beauty",
            Self::Fragrances => "fragrances",
            Self::Furniture => "furniture",
            Self::Groceries => "groceries",
            Self::HomeDecoration => "home-decoration",
            Self::KitchenAccessories => "kitchen-accessories",
            Self::Laptops => "laptops",
            Self::MensShirts => "mens-shirts",
            Self::MensShoes => "mens-shoes",
            Self::MensWatches => "mens-watches",
            Self::MobileAccessories => "mobile-accessories",
            Self::Motorcycle => "motorcycle",
            Self::SkinCare => "skin-care",
            Self::Smartphones => "smartphones",
            Self::SportsAccessories => "sports-accessories",
            Self::Sunglasses => "sunglasses",
            Self::Tablets => "tablets",
            Self::Tops => "tops",
            Self::Vehicle => "vehicle",
            Self::WomensBags => "womens-bags",
            Self::WomensDresses => "womens-dresses",
            Self::WomensJewellery => "womens-jewellery",
            Self::WomensShoes => "womens-shoes",
            Self::WomensWatches => "womens-watches",
        }
    }
}

pub struct ProductNode(pub Product);

/// A product snapshot from the catalog.
#[Object(name = "Product")]
impl ProductNode {
    async fn id(&self) -> ID {
        ID::from(self.0.id.as_str())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    /// Unit price in dollars.
    async fn price(&self) -> f64 {
        self.0.price.as_f64()
    }

    /// Average rating, 0 to 5.
    async fn rating(&self) -> f64 {
        self.0.rating
    }

    async fn thumbnail(&self) -> &str {
        &self.0.thumbnail
    }

    async fn images(&self) -> &[String] {
        &self.0.images
    }

    /// Category slug, words separated by underscores.
    async fn category(&self) -> String {
        self.0.category.to_exposed()
    }
}

pub struct ProductPageNode(pub ProductPage);

/// One page of a category listing.
#[Object(name = "ProductPage")]
impl ProductPageNode {
    async fn results(&self) -> Vec<ProductNode> {
        self.0.results.iter().cloned().map(ProductNode).collect()
    }

    /// Number of products in the whole category.
    async fn total(&self) -> u32 {
        self.0.total
    }

    async fn skip(&self) -> u32 {
        self.0.skip
    }

    async fn limit(&self) -> u32 {
        self.0.limit
    }
}

pub struct CategoryNode(pub Category);

/// A category as listed by the catalog, with display name and image.
#[Object(name = "CategoryInfo")]
impl CategoryNode {
    async fn slug(&self) -> String {
        self.0.slug.to_exposed()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Representative image URL. Empty when none is known.
    async fn image(&self) -> &str {
        &self.0.image
    }
}

pub struct CartItemNode(pub CartItem);

/// A cart line joined with its product.
#[Object(name = "CartItem")]
impl CartItemNode {
    async fn id(&self) -> ID {
        ID::from(self.0.id.as_str())
    }

    async fn quantity(&self) -> u32 {
        self.0.quantity
    }

    async fn product(&self) -> ProductNode {
        ProductNode(self.0.product.clone())
    }

    /// Price times quantity.
    async fn line_total(&self) -> f64 {
        self.0.line_total().as_f64()
    }
}

pub struct CartLineItemNode(pub CartLineItem);

#[Object(name = "CartLineItem")]
impl CartLineItemNode {
    async fn id(&self) -> ID {
        ID::from(self.0.id.as_str())
    }

    async fn product_id(&self) -> ID {
        ID::from(self.0.product_id.as_str())
    }

    async fn quantity(&self) -> u32 {
        self.0.quantity
    }
}
