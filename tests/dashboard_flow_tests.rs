use chrono::{TimeZone, Utc};

use tally::core::action::{Action, Effect, update};
use tally::core::product::{Category, Product, ProductDraft};
use tally::core::query::{filter_products, paginate_products, sort_products, total_pages};
use tally::core::seed::demo_products;
use tally::core::state::{App, SortDirection, SortField};

// ============================================================================
// Helper Functions
// ============================================================================

/// App seeded with the demo dataset: 12 products, 3 in Books.
fn seeded_app() -> App {
    App::new(demo_products())
}

fn priced(id: &str, price: f64) -> Product {
    let at = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        category: Category::Other,
        price,
        stock: 1,
        image: None,
        description: None,
        created_at: at,
        updated_at: at,
    }
}

fn widget_draft() -> ProductDraft {
    ProductDraft {
        name: "Widget".to_string(),
        category: Category::Other,
        price: 9.99,
        stock: 5,
        image: None,
        description: None,
    }
}

/// The full derivation the table renders: filter → sort → paginate.
fn visible<'a>(app: &'a App) -> (Vec<&'a Product>, usize) {
    let filtered = filter_products(&app.products, &app.filters);
    let count = filtered.len();
    let sorted = sort_products(&filtered, app.sorting.field, app.sorting.direction);
    let page = paginate_products(
        &sorted,
        app.pagination.current_page,
        app.pagination.items_per_page,
    );
    (page, count)
}

// ============================================================================
// Dashboard Scenarios
// ============================================================================

#[test]
fn test_books_filter_scenario() {
    // Seed with 12 products, 3 in category Books, 10 per page.
    let mut app = seeded_app();
    assert_eq!(app.products.len(), 12);
    update(&mut app, Action::SetCurrentPage(2));

    update(&mut app, Action::SetCategoryFilter(Some(Category::Books)));

    assert_eq!(app.pagination.current_page, 1, "filtering resets the page");
    let (page, count) = visible(&app);
    assert_eq!(count, 3);
    assert_eq!(page.len(), 3, "all three Books fit on page 1");
    assert!(page.iter().all(|p| p.category == Category::Books));
    assert_eq!(total_pages(count, app.pagination.items_per_page), 1);
}

#[test]
fn test_add_then_delete_leaves_collection_unchanged() {
    let mut app = seeded_app();
    let before = app.products.len();
    let selected_before = app.selected.clone();

    update(&mut app, Action::AddProduct(widget_draft()));
    let id = app.products.last().expect("just added").id.clone();
    update(&mut app, Action::DeleteProduct(id));

    assert_eq!(app.products.len(), before);
    assert_eq!(app.selected, selected_before);
}

#[test]
fn test_toggle_selection_is_an_idempotent_pair() {
    let mut app = seeded_app();
    let id = app.products[4].id.clone();
    let first_id = app.products[0].id.clone();
    update(&mut app, Action::SelectProduct(first_id));
    let before = app.selected.clone();

    update(&mut app, Action::ToggleSelection(id.clone()));
    update(&mut app, Action::ToggleSelection(id));

    assert_eq!(app.selected, before);
}

#[test]
fn test_sort_by_price_both_directions() {
    let products = vec![priced("a", 5.0), priced("b", 1.0), priced("c", 3.0)];
    let refs: Vec<&Product> = products.iter().collect();

    let asc = sort_products(&refs, Some(SortField::Price), SortDirection::Asc);
    let prices: Vec<f64> = asc.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![1.0, 3.0, 5.0]);

    let desc = sort_products(&refs, Some(SortField::Price), SortDirection::Desc);
    let prices: Vec<f64> = desc.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![5.0, 3.0, 1.0]);
}

// ============================================================================
// Cross-Cutting Laws
// ============================================================================

#[test]
fn test_page_reset_law() {
    let resetting: [Action; 4] = [
        Action::SetCategoryFilter(Some(Category::Food)),
        Action::ToggleInStockFilter,
        Action::SetSearchQuery("oak".to_string()),
        Action::SetItemsPerPage(5),
    ];

    for action in resetting {
        let mut app = seeded_app();
        update(&mut app, Action::SetCurrentPage(2));
        update(&mut app, action.clone());
        assert_eq!(app.pagination.current_page, 1, "not reset by {action:?}");
    }
}

#[test]
fn test_selection_subset_invariant_through_mixed_deletes() {
    let mut app = seeded_app();
    update(&mut app, Action::SelectAll);

    let ids: Vec<String> = app.products.iter().map(|p| p.id.clone()).collect();
    update(&mut app, Action::DeleteProduct(ids[0].clone()));
    update(&mut app, Action::DeleteProduct(ids[5].clone()));

    for id in &app.selected {
        assert!(
            app.products.iter().any(|p| &p.id == id),
            "selection kept a deleted id"
        );
    }

    update(&mut app, Action::DeleteSelected);
    assert!(app.selected.is_empty());
    assert!(app.products.is_empty(), "everything was selected");
}

#[test]
fn test_pagination_covers_filtered_sorted_sequence_exactly_once() {
    let mut app = seeded_app();
    update(&mut app, Action::ToggleInStockFilter);
    update(
        &mut app,
        Action::SetSorting {
            field: Some(SortField::Price),
            direction: SortDirection::Desc,
        },
    );
    update(&mut app, Action::SetItemsPerPage(5));

    let filtered = filter_products(&app.products, &app.filters);
    let sorted = sort_products(&filtered, app.sorting.field, app.sorting.direction);
    let pages = total_pages(sorted.len(), 5);

    let mut reassembled: Vec<&str> = Vec::new();
    for page in 1..=pages {
        for product in paginate_products(&sorted, page, 5) {
            reassembled.push(product.id.as_str());
        }
    }

    let expected: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(reassembled, expected);
}

#[test]
fn test_out_of_range_page_is_empty_not_an_error() {
    let mut app = seeded_app();
    update(&mut app, Action::SetCurrentPage(40));
    let (page, count) = visible(&app);
    assert!(page.is_empty());
    assert_eq!(count, 12, "the result set itself is unaffected");
}

// ============================================================================
// End-to-End Session
// ============================================================================

#[test]
fn test_full_dashboard_session() {
    let mut app = seeded_app();

    // Narrow to in-stock Books about rust
    update(&mut app, Action::SetCategoryFilter(Some(Category::Books)));
    update(&mut app, Action::ToggleInStockFilter);
    update(&mut app, Action::SetSearchQuery("rust".to_string()));

    let (page, count) = visible(&app);
    assert_eq!(count, 1);
    assert_eq!(page[0].name, "The Rust Programming Language");

    // Edit it through the reducer
    let id = page[0].id.clone();
    let created_at = page[0].created_at;
    update(
        &mut app,
        Action::UpdateProduct {
            id: id.clone(),
            draft: ProductDraft {
                name: "The Rust Programming Language".to_string(),
                category: Category::Books,
                price: 44.95,
                stock: 9,
                image: None,
                description: Some("Third edition".to_string()),
            },
        },
    );
    let edited = app.products.iter().find(|p| p.id == id).expect("still present");
    assert_eq!(edited.price, 44.95);
    assert_eq!(edited.created_at, created_at, "creation time is immutable");
    assert!(edited.updated_at >= edited.created_at);

    // Clear the search, select the visible books, batch delete
    update(&mut app, Action::SetSearchQuery(String::new()));
    let page_ids: Vec<_> = {
        let (page, _) = visible(&app);
        page.iter().map(|product| product.id.clone()).collect()
    };
    for id in page_ids {
        update(&mut app, Action::SelectProduct(id));
    }
    update(&mut app, Action::DeleteSelected);

    let (page, count) = visible(&app);
    assert_eq!(count, 0, "no in-stock Books remain");
    assert!(page.is_empty());
    assert_eq!(app.products.len(), 10, "the out-of-stock Book and the rest survive");

    // Quit is the only action with an effect
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}
