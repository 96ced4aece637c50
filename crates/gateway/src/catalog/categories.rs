//! Representative images for the remote catalog's categories.
//!
//! The remote category listing carries no image, so each known slug (remote,
//! hyphenated form) maps to one product thumbnail from that category.

use the_store_core::CategorySlug;

const CDN: &str = "https://cdn.dummyjson.com/product-images";

const CATEGORY_IMAGES: &[(&str, &str)] = &[
    ("beauty", "beauty/powder-canister/thumbnail.webp"),
    ("fragrances", "fragrances/calvin-klein-ck-one/thumbnail.webp"),
    ("furniture", "furniture/knoll-saarinen-executive-conference-chair/thumbnail.webp"),
    ("groceries", "groceries/water/thumbnail.webp"),
    ("home-decoration", "home-decoration/house-showpiece-plant/thumbnail.webp"),
    ("kitchen-accessories", "kitchen-accessories/lunch-box/thumbnail.webp"),
    ("laptops", "laptops/huawei-matebook-x-pro/thumbnail.webp"),
    ("mens-shirts", "mens-shirts/blue-&-black-check-shirt/thumbnail.webp"),
    ("mens-shoes", "mens-shoes/puma-future-rider-trainers/thumbnail.webp"),
    ("mens-watches", "mens-watches/rolex-cellini-date-black-dial/thumbnail.webp"),
    ("mobile-accessories", "mobile-accessories/amazon-echo-plus/thumbnail.webp"),
    ("motorcycle", "motorcycle/generic-motorcycle/thumbnail.webp"),
    ("skin-care", "skin-care/olay-ultra-moisture-shea-butter-body-wash/thumbnail.webp"),
    ("smartphones", "smartphones/realme-xt/thumbnail.webp"),
    ("sports-accessories", "sports-accessories/american-football/thumbnail.webp"),
    ("sunglasses", "sunglasses/green-and-black-glasses/thumbnail.webp"),
    ("tablets", "tablets/samsung-galaxy-tab-s8-plus-grey/thumbnail.webp"),
    ("tops", "tops/girl-summer-dress/thumbnail.webp"),
    ("vehicle", "vehicle/durango-sxt-rwd/thumbnail.webp"),
    ("womens-bags", "womens-bags/heshe-women's-leather-bag/thumbnail.webp"),
    ("womens-dresses", "womens-dresses/dress-pea/thumbnail.webp"),
    ("womens-jewellery", "womens-jewellery/tropical-earring/thumbnail.webp"),
    ("womens-shoes", "womens-shoes/calvin-klein-heel-shoes/thumbnail.webp"),
    ("womens-watches", "womens-watches/watch-gold-for-women/thumbnail.webp"),
];

/// Image URL for a category, or an empty string when the slug is unknown.
#[must_use]
pub fn image_for(slug: &CategorySlug) -> String {
    CATEGORY_IMAGES
        .iter()
        .find(|(known, _)| *known == slug.as_remote())
        .map_or_else(String::new, |(_, path)| format!("{CDN}/{path}"))
}
