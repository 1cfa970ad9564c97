//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{TimeZone, Utc};

use crate::core::product::{Category, Product, ProductDraft};
use crate::core::state::App;

/// The demo dataset doubles as the standard fixture: 12 products, 3 of them
/// Books, with out-of-stock, low-stock, and missing-optional rows — and all
/// timestamps, prices, and names distinct.
pub fn sample_products() -> Vec<Product> {
    crate::core::seed::demo_products()
}

/// Creates a test App seeded with `sample_products()`.
pub fn test_app() -> App {
    App::new(sample_products())
}

/// A minimal product for targeted assertions. Timestamps are fixed; tests
/// that care about time ordering build their own.
pub fn product(id: &str, name: &str, category: Category, price: f64, stock: u32) -> Product {
    let at = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price,
        stock,
        image: None,
        description: None,
        created_at: at,
        updated_at: at,
    }
}

/// A minimal valid draft, as the form would emit it.
pub fn draft(name: &str, price: f64, stock: u32) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: Category::Other,
        price,
        stock,
        image: None,
        description: None,
    }
}
