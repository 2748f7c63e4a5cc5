use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sellable item in the catalog.
///
/// `category` is the denormalized category *name*, not an id: products point
/// at categories by exact string match, so renaming a category silently
/// orphans its products. The storefront pages depend on that exact matching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub price: Decimal,
    /// Pre-discount price. Only meaningful when greater than `price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_images: Vec<String>,
    pub description: String,
    /// Aggregate rating, 0.0 to 5.0.
    pub rating: f32,
    pub reviews_count: u32,
    /// Units on hand; `None` means unknown/unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// Attribute name to value, e.g. "Upper" -> "Engineered knit".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl Product {
    /// Discount percentage to display, rounded to the nearest whole percent.
    ///
    /// Present only when `original_price` exceeds `price`; a product priced
    /// at 199.99 down from 249.99 displays 20%.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price {
            return None;
        }
        let percent = (original - self.price) / original * Decimal::from(100);
        percent.round().to_u32()
    }

    /// Whether the product should appear on listing pages.
    pub fn is_visible(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}
