//! # Seed Data
//!
//! The store is seeded at startup from an ordered list of products: either
//! the built-in demo dataset below or a JSON file passed via `--seed` /
//! config. Any source producing well-formed `Product` values is acceptable;
//! nothing is ever written back (mutations live and die with the process).

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use log::info;

use crate::core::product::{Category, Product};

fn ts(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn demo(
    id: &str,
    name: &str,
    category: Category,
    price: f64,
    stock: u32,
    image: Option<&str>,
    description: Option<&str>,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price,
        stock,
        image: image.map(str::to_string),
        description: description.map(str::to_string),
        created_at: created,
        updated_at: updated,
    }
}

/// The built-in demo inventory: a dozen products spread across every kind of
/// state the dashboard renders — out of stock, low stock, missing image,
/// missing description.
pub fn demo_products() -> Vec<Product> {
    vec![
        demo(
            "prod-0001",
            "Wireless Headphones",
            Category::Electronics,
            129.99,
            34,
            Some("https://images.example.com/headphones.jpg"),
            Some("Over-ear, noise cancelling, 30h battery"),
            ts(2024, 1, 8, 9),
            ts(2024, 3, 2, 14),
        ),
        demo(
            "prod-0002",
            "Mechanical Keyboard",
            Category::Electronics,
            89.50,
            7,
            Some("https://images.example.com/keyboard.jpg"),
            Some("Tenkeyless, brown switches"),
            ts(2024, 1, 9, 10),
            ts(2024, 2, 20, 11),
        ),
        demo(
            "prod-0003",
            "USB-C Charger",
            Category::Electronics,
            24.00,
            0,
            None,
            Some("65W GaN wall charger"),
            ts(2024, 1, 12, 8),
            ts(2024, 4, 1, 16),
        ),
        demo(
            "prod-0004",
            "Wool Sweater",
            Category::Clothing,
            59.95,
            18,
            Some("https://images.example.com/sweater.jpg"),
            None,
            ts(2024, 1, 15, 12),
            ts(2024, 1, 15, 12),
        ),
        demo(
            "prod-0005",
            "Espresso Beans 1kg",
            Category::Food,
            21.40,
            52,
            None,
            Some("Medium roast, single origin"),
            ts(2024, 1, 20, 7),
            ts(2024, 3, 18, 9),
        ),
        demo(
            "prod-0006",
            "Oak Bookshelf",
            Category::Furniture,
            249.00,
            3,
            Some("https://images.example.com/bookshelf.jpg"),
            Some("Five shelves, solid oak"),
            ts(2024, 1, 22, 13),
            ts(2024, 2, 2, 10),
        ),
        demo(
            "prod-0007",
            "Desk Lamp",
            Category::Furniture,
            34.50,
            26,
            None,
            Some("Adjustable arm, warm LED"),
            ts(2024, 1, 25, 9),
            ts(2024, 2, 28, 15),
        ),
        demo(
            "prod-0008",
            "The Rust Programming Language",
            Category::Books,
            39.95,
            11,
            Some("https://images.example.com/trpl.jpg"),
            Some("Second edition, paperback"),
            ts(2024, 2, 1, 10),
            ts(2024, 3, 5, 12),
        ),
        demo(
            "prod-0009",
            "Field Guide to Birds",
            Category::Books,
            27.00,
            5,
            None,
            None,
            ts(2024, 2, 3, 11),
            ts(2024, 2, 3, 11),
        ),
        demo(
            "prod-0010",
            "Cookbook: Weeknight Dinners",
            Category::Books,
            32.50,
            0,
            Some("https://images.example.com/cookbook.jpg"),
            Some("120 recipes under 30 minutes"),
            ts(2024, 2, 6, 9),
            ts(2024, 4, 10, 8),
        ),
        demo(
            "prod-0011",
            "Wooden Train Set",
            Category::Toys,
            45.00,
            14,
            Some("https://images.example.com/train.jpg"),
            Some("48 pieces, ages 3+"),
            ts(2024, 2, 10, 14),
            ts(2024, 2, 14, 10),
        ),
        demo(
            "prod-0012",
            "Gift Card",
            Category::Other,
            25.00,
            200,
            None,
            None,
            ts(2024, 2, 12, 15),
            ts(2024, 2, 12, 16),
        ),
    ]
}

/// Load a product list from a JSON file (an array of camelCase records,
/// the same shape `Product` serializes to).
pub fn load_seed_file(path: &Path) -> io::Result<Vec<Product>> {
    let json = fs::read_to_string(path)?;
    let products: Vec<Product> =
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    info!("Loaded {} products from {}", products.len(), path.display());
    Ok(products)
}
