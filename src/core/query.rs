//! # Query Pipeline
//!
//! Pure derivation of "what the user sees" from the full collection:
//! filter → sort → paginate, applied in that fixed order. Nothing here
//! touches `App` or mutates its input; the rendering layer recomputes the
//! whole chain every frame (collections are small, caching would be noise).

use std::cmp::Ordering;

use crate::core::product::{Category, Product};
use crate::core::state::{Filters, SortDirection, SortField};

/// Keep products matching all three criteria, preserving input order.
///
/// A product with no description and a query that misses the name is
/// excluded — absence is "no match" for that field, not a wildcard.
pub fn filter_products<'a>(products: &'a [Product], filters: &Filters) -> Vec<&'a Product> {
    let query = filters.search_query.to_lowercase();
    products
        .iter()
        .filter(|product| {
            let matches_category = filters
                .category
                .is_none_or(|category| product.category == category);

            let matches_stock = !filters.in_stock_only || product.stock > 0;

            let matches_search = query.is_empty()
                || product.name.to_lowercase().contains(&query)
                || product
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&query));

            matches_category && matches_stock && matches_search
        })
        .collect()
}

/// Case-insensitive comparison, the stand-in for locale collation.
fn compare_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare_by(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_str(&a.name, &b.name),
        SortField::Category => compare_str(a.category.label(), b.category.label()),
        SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortField::Stock => a.stock.cmp(&b.stock),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

/// Return a sorted copy. `field: None` returns the input unchanged.
///
/// `Desc` reverses the comparison, not the output sequence, so equal keys
/// keep their input-relative order in both directions (stable sort).
pub fn sort_products<'a>(
    products: &[&'a Product],
    field: Option<SortField>,
    direction: SortDirection,
) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    let Some(field) = field else {
        return sorted;
    };
    sorted.sort_by(|a, b| {
        let ordering = compare_by(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Slice out the current page, clipped to bounds. An out-of-range page
/// yields an empty vec — defensive, not an error.
pub fn paginate_products<'a>(
    products: &[&'a Product],
    current_page: usize,
    items_per_page: usize,
) -> Vec<&'a Product> {
    let start = current_page.saturating_sub(1).saturating_mul(items_per_page);
    if start >= products.len() || items_per_page == 0 {
        return Vec::new();
    }
    let end = (start + items_per_page).min(products.len());
    products[start..end].to_vec()
}

/// Page count for a result set; never less than 1, even for zero results.
pub fn total_pages(result_count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 1;
    }
    result_count.div_ceil(items_per_page).max(1)
}

/// Count products per category, every category present (zero-initialized),
/// in `Category::ALL` order. Chart fodder.
pub fn category_counts(products: &[Product]) -> Vec<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> =
        Category::ALL.iter().map(|category| (*category, 0)).collect();
    for product in products {
        if let Some(entry) = counts.iter_mut().find(|(category, _)| *category == product.category) {
            entry.1 += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{product, sample_products};

    fn names<'a>(products: &'a [&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn no_filters() -> Filters {
        Filters::default()
    }

    #[test]
    fn test_filter_empty_criteria_keeps_everything_in_order() {
        let products = sample_products();
        let filtered = filter_products(&products, &no_filters());
        assert_eq!(filtered.len(), products.len());
        let input_order: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names(&filtered), input_order);
    }

    #[test]
    fn test_filter_by_category() {
        let products = sample_products();
        let filters = Filters {
            category: Some(Category::Books),
            ..Filters::default()
        };
        let filtered = filter_products(&products, &filters);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|p| p.category == Category::Books));
    }

    #[test]
    fn test_filter_in_stock_only() {
        let products = sample_products();
        let filters = Filters {
            in_stock_only: true,
            ..Filters::default()
        };
        let filtered = filter_products(&products, &filters);
        assert!(filtered.iter().all(|p| p.stock > 0));
        assert!(filtered.len() < products.len(), "fixture needs an out-of-stock product");
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let products = vec![
            product("n1", "Desk Lamp", Category::Furniture, 30.0, 4),
            product("n2", "Notebook", Category::Books, 3.0, 9),
        ];
        let filters = Filters {
            search_query: "LAMP".to_string(),
            ..Filters::default()
        };
        let filtered = filter_products(&products, &filters);
        assert_eq!(names(&filtered), vec!["Desk Lamp"]);
    }

    #[test]
    fn test_filter_search_matches_description() {
        let mut with_desc = product("d1", "Mug", Category::Other, 8.0, 2);
        with_desc.description = Some("Ceramic, dishwasher safe".to_string());
        let without_desc = product("d2", "Plate", Category::Other, 6.0, 2);

        let products = vec![with_desc, without_desc];
        let filters = Filters {
            search_query: "ceramic".to_string(),
            ..Filters::default()
        };
        let filtered = filter_products(&products, &filters);
        assert_eq!(names(&filtered), vec!["Mug"]);
    }

    #[test]
    fn test_filter_missing_description_is_no_match() {
        // Name misses the query, description is absent: excluded.
        let products = vec![product("d3", "Plate", Category::Other, 6.0, 2)];
        let filters = Filters {
            search_query: "ceramic".to_string(),
            ..Filters::default()
        };
        assert!(filter_products(&products, &filters).is_empty());
    }

    #[test]
    fn test_filter_predicates_are_anded() {
        let products = sample_products();
        let filters = Filters {
            category: Some(Category::Books),
            in_stock_only: true,
            search_query: String::new(),
        };
        let filtered = filter_products(&products, &filters);
        assert!(filtered
            .iter()
            .all(|p| p.category == Category::Books && p.stock > 0));
    }

    #[test]
    fn test_sort_none_field_keeps_input_order() {
        let products = sample_products();
        let refs: Vec<&Product> = products.iter().collect();
        let sorted = sort_products(&refs, None, SortDirection::Desc);
        assert_eq!(names(&sorted), names(&refs));
    }

    #[test]
    fn test_sort_by_price() {
        let products = vec![
            product("a", "A", Category::Other, 5.0, 1),
            product("b", "B", Category::Other, 1.0, 1),
            product("c", "C", Category::Other, 3.0, 1),
        ];
        let refs: Vec<&Product> = products.iter().collect();

        let asc = sort_products(&refs, Some(SortField::Price), SortDirection::Asc);
        assert_eq!(names(&asc), vec!["B", "C", "A"]);

        let desc = sort_products(&refs, Some(SortField::Price), SortDirection::Desc);
        assert_eq!(names(&desc), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let products = vec![
            product("a", "First", Category::Other, 2.0, 1),
            product("b", "Second", Category::Other, 2.0, 1),
            product("c", "Third", Category::Other, 2.0, 1),
        ];
        let refs: Vec<&Product> = products.iter().collect();

        // Equal prices: input order survives in BOTH directions, because
        // Desc flips the comparison, never the sequence.
        let asc = sort_products(&refs, Some(SortField::Price), SortDirection::Asc);
        assert_eq!(names(&asc), vec!["First", "Second", "Third"]);
        let desc = sort_products(&refs, Some(SortField::Price), SortDirection::Desc);
        assert_eq!(names(&desc), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_sort_asc_reversed_equals_desc_for_distinct_keys() {
        let products = sample_products();
        let refs: Vec<&Product> = products.iter().collect();
        for field in [
            SortField::Name,
            SortField::Price,
            SortField::Stock,
            SortField::CreatedAt,
            SortField::UpdatedAt,
        ] {
            let mut asc = sort_products(&refs, Some(field), SortDirection::Asc);
            let desc = sort_products(&refs, Some(field), SortDirection::Desc);
            asc.reverse();
            // Compare keys, not identities: ties may order differently.
            let key = |p: &Product| match field {
                SortField::Price => format!("{:.4}", p.price),
                SortField::Stock => p.stock.to_string(),
                SortField::Name => p.name.to_lowercase(),
                SortField::CreatedAt => p.created_at.to_rfc3339(),
                _ => p.updated_at.to_rfc3339(),
            };
            let asc_keys: Vec<String> = asc.iter().map(|&p| key(p)).collect();
            let desc_keys: Vec<String> = desc.iter().map(|&p| key(p)).collect();
            assert_eq!(asc_keys, desc_keys);
        }
    }

    #[test]
    fn test_sort_by_category_orders_labels() {
        let products = vec![
            product("a", "A", Category::Toys, 1.0, 1),
            product("b", "B", Category::Books, 1.0, 1),
            product("c", "C", Category::Electronics, 1.0, 1),
            product("d", "D", Category::Books, 1.0, 1),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        let sorted = sort_products(&refs, Some(SortField::Category), SortDirection::Asc);
        assert_eq!(names(&sorted), vec!["B", "D", "C", "A"]);
    }

    #[test]
    fn test_sort_name_is_case_insensitive() {
        let products = vec![
            product("a", "zebra print", Category::Other, 1.0, 1),
            product("b", "Apple Stand", Category::Other, 1.0, 1),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        let sorted = sort_products(&refs, Some(SortField::Name), SortDirection::Asc);
        assert_eq!(names(&sorted), vec!["Apple Stand", "zebra print"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let products = sample_products();
        let refs: Vec<&Product> = products.iter().collect();
        let before = names(&refs);
        let _ = sort_products(&refs, Some(SortField::Price), SortDirection::Desc);
        assert_eq!(names(&refs), before);
    }

    #[test]
    fn test_paginate_slices_and_clips() {
        let products = sample_products();
        let refs: Vec<&Product> = products.iter().collect();

        let page1 = paginate_products(&refs, 1, 5);
        assert_eq!(names(&page1), names(&refs[..5]));

        let last = paginate_products(&refs, 3, 5);
        assert_eq!(last.len(), refs.len() - 10);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let products = sample_products();
        let refs: Vec<&Product> = products.iter().collect();
        assert!(paginate_products(&refs, 99, 10).is_empty());
    }

    #[test]
    fn test_pages_concatenate_to_full_sequence() {
        let products = sample_products();
        let refs: Vec<&Product> = products.iter().collect();
        let per_page = 5;
        let pages = total_pages(refs.len(), per_page);

        let mut reassembled: Vec<&Product> = Vec::new();
        for page in 1..=pages {
            reassembled.extend(paginate_products(&refs, page, per_page));
        }
        assert_eq!(names(&reassembled), names(&refs));
    }

    #[test]
    fn test_total_pages_rounds_up_with_floor_of_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn test_category_counts_zero_initializes_every_category() {
        let products = vec![
            product("a", "A", Category::Books, 1.0, 1),
            product("b", "B", Category::Books, 1.0, 1),
            product("c", "C", Category::Toys, 1.0, 1),
        ];
        let counts = category_counts(&products);
        assert_eq!(counts.len(), Category::ALL.len());
        for (category, count) in &counts {
            let expected = match category {
                Category::Books => 2,
                Category::Toys => 1,
                _ => 0,
            };
            assert_eq!(*count, expected, "wrong count for {}", category);
        }
    }
}
