//! # Product Records
//!
//! The domain type everything else revolves around. A `Product` is one
//! inventory row; a `ProductDraft` is what the form hands over before the
//! store stamps an id and timestamps onto it.
//!
//! Serde names are camelCase so seed files match the conventional JSON shape
//! (`createdAt`, not `created_at`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock at or below this count renders as a low-stock warning.
/// Overridable via `[general] low_stock_threshold` in the config file.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// The closed set of category labels a product can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Furniture,
    Books,
    Toys,
    Other,
}

impl Category {
    /// Every category, in display order. Charts and the filter cycle rely on
    /// this ordering being stable.
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Furniture,
        Category::Books,
        Category::Toys,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Furniture => "Furniture",
            Category::Books => "Books",
            Category::Toys => "Toys",
            Category::Other => "Other",
        }
    }

    /// Abbreviated label for narrow spots (chart bar captions).
    pub fn short_label(&self) -> &'static str {
        match self {
            Category::Electronics => "Elec",
            Category::Clothing => "Cloth",
            Category::Food => "Food",
            Category::Furniture => "Furn",
            Category::Books => "Books",
            Category::Toys => "Toys",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single inventory record.
///
/// Invariants (maintained by the reducer in `core::action`):
/// - `id` is unique across the collection and never changes.
/// - `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form payload: a `Product` minus the store-owned fields.
///
/// The form boundary maps empty image/description input to `None` so that
/// "absent" stays distinguishable from "empty" (search treats a missing
/// description as no match for that field).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub stock: u32,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Generate a new unique product id.
pub fn new_product_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
