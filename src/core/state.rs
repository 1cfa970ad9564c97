//! # Application State
//!
//! Core business state for Tally. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── products: Vec<Product>       // the collection, insertion order
//! ├── selected: HashSet<String>    // ids marked for batch operations
//! ├── filters: Filters             // category / in-stock / search
//! ├── pagination: Pagination       // current page + page size
//! ├── sorting: Sorting             // sort field + direction
//! └── status_message: String       // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations. Consumers read
//! snapshots; nothing outside the reducer mutates the collection.

use std::collections::HashSet;

use crate::core::config::ResolvedConfig;
use crate::core::product::{Category, Product};

/// Active narrowing criteria. `category: None` means "all categories";
/// an empty `search_query` matches everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filters {
    pub category: Option<Category>,
    pub in_stock_only: bool,
    pub search_query: String,
}

/// Which slice of the filtered/sorted collection is displayed.
/// `current_page` is 1-based and deliberately unclamped here — an
/// out-of-range page just renders empty (see `core::query`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: usize,
}

/// Fields the collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Category,
    Price,
    Stock,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Display ordering. `field: None` keeps insertion order (a stable no-op,
/// not alphabetical-by-default).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sorting {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

pub struct App {
    pub products: Vec<Product>,
    pub selected: HashSet<String>,
    pub filters: Filters,
    pub pagination: Pagination,
    pub sorting: Sorting,
    pub status_message: String,
}

impl App {
    pub fn new(products: Vec<Product>) -> Self {
        let status_message = format!("{} products loaded", products.len());
        Self {
            products,
            selected: HashSet::new(),
            filters: Filters::default(),
            pagination: Pagination {
                current_page: 1,
                items_per_page: 10,
            },
            sorting: Sorting {
                field: Some(SortField::Name),
                direction: SortDirection::Asc,
            },
            status_message,
        }
    }

    pub fn from_config(products: Vec<Product>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(products);
        app.pagination.items_per_page = config.items_per_page;
        app
    }
}
