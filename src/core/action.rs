//! # Actions
//!
//! Everything that can happen to the inventory becomes an `Action`.
//! User presses `d` on a row? That's `Action::DeleteProduct(id)`.
//! Form submitted? That's `Action::AddProduct(draft)`.
//!
//! The `update()` function takes the current state and an action and applies
//! it in place, returning an `Effect` for the few cases where the outside
//! world has to react (quitting). No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  State'
//! ```
//!
//! Cross-cutting invariants live in this one place:
//! - deleting a product also drops its id from the selection set,
//! - every filter or page-size change resets `current_page` to 1,
//! - unknown ids are silent no-ops, never errors.

use chrono::Utc;
use log::debug;

use crate::core::product::{new_product_id, Category, Product, ProductDraft};
use crate::core::state::{App, SortDirection, SortField};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append a new product; the store stamps the id and timestamps.
    AddProduct(ProductDraft),
    /// Replace the fields of the product with this id; no-op if unknown.
    UpdateProduct { id: String, draft: ProductDraft },
    DeleteProduct(String),
    /// Delete every product whose id is currently selected.
    DeleteSelected,
    SelectProduct(String),
    DeselectProduct(String),
    ToggleSelection(String),
    SelectAll,
    DeselectAll,
    SetCategoryFilter(Option<Category>),
    ToggleInStockFilter,
    SetSearchQuery(String),
    /// Unclamped; an out-of-range page renders empty rather than erroring.
    SetCurrentPage(usize),
    SetItemsPerPage(usize),
    SetSorting {
        field: Option<SortField>,
        direction: SortDirection,
    },
    Quit,
}

/// What the event loop should do after an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::AddProduct(draft) => {
            let now = Utc::now();
            let product = Product {
                id: new_product_id(),
                name: draft.name,
                category: draft.category,
                price: draft.price,
                stock: draft.stock,
                image: draft.image,
                description: draft.description,
                created_at: now,
                updated_at: now,
            };
            app.status_message = format!("Added {}", product.name);
            app.products.push(product);
        }

        Action::UpdateProduct { id, draft } => {
            if let Some(product) = app.products.iter_mut().find(|p| p.id == id) {
                product.name = draft.name;
                product.category = draft.category;
                product.price = draft.price;
                product.stock = draft.stock;
                product.image = draft.image;
                product.description = draft.description;
                product.updated_at = Utc::now();
                app.status_message = format!("Updated {}", product.name);
            }
        }

        Action::DeleteProduct(id) => {
            let before = app.products.len();
            app.products.retain(|p| p.id != id);
            app.selected.remove(&id);
            if app.products.len() < before {
                app.status_message = "Product deleted".to_string();
            }
        }

        Action::DeleteSelected => {
            let before = app.products.len();
            app.products.retain(|p| !app.selected.contains(&p.id));
            app.selected.clear();
            let removed = before - app.products.len();
            if removed > 0 {
                app.status_message = format!("{} products deleted", removed);
            }
        }

        Action::SelectProduct(id) => {
            app.selected.insert(id);
        }

        Action::DeselectProduct(id) => {
            app.selected.remove(&id);
        }

        Action::ToggleSelection(id) => {
            if !app.selected.remove(&id) {
                app.selected.insert(id);
            }
        }

        Action::SelectAll => {
            app.selected = app.products.iter().map(|p| p.id.clone()).collect();
        }

        Action::DeselectAll => {
            app.selected.clear();
        }

        Action::SetCategoryFilter(category) => {
            app.filters.category = category;
            app.pagination.current_page = 1;
        }

        Action::ToggleInStockFilter => {
            app.filters.in_stock_only = !app.filters.in_stock_only;
            app.pagination.current_page = 1;
        }

        Action::SetSearchQuery(query) => {
            app.filters.search_query = query;
            app.pagination.current_page = 1;
        }

        Action::SetCurrentPage(page) => {
            app.pagination.current_page = page;
        }

        Action::SetItemsPerPage(count) => {
            app.pagination.items_per_page = count;
            app.pagination.current_page = 1;
        }

        Action::SetSorting { field, direction } => {
            app.sorting.field = field;
            app.sorting.direction = direction;
        }

        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
