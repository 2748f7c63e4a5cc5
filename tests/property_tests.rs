//! Property-based tests for the catalog store.
//!
//! These use proptest to verify the store's invariants across a wide range
//! of inputs, including ids and category names that do not exist in the
//! seeded data.

use proptest::prelude::*;
use storefront_catalog::catalog::seed;

// Strategies for generating query inputs
fn id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,2}",    // shaped like the seeded ids, hits and misses
        "[a-z-]{1,12}",  // never matches a seeded id
    ]
}

fn category_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Sneakers".to_string())),
        Just(Some("Boots".to_string())),
        Just(Some("Apparel".to_string())),
        "[A-Za-z ]{1,12}".prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn related_products_exclude_the_given_id_and_respect_the_limit(
        id in id_strategy(),
        category in category_strategy(),
        limit in 0usize..32,
    ) {
        let catalog = seed::demo_catalog();
        let related = catalog.get_related_products(&id, category.as_deref(), limit);

        prop_assert!(related.len() <= limit);
        prop_assert!(related.iter().all(|p| p.id != id));
        if let Some(c) = &category {
            prop_assert!(related.iter().all(|p| &p.category == c));
        }
    }

    #[test]
    fn category_filter_returns_only_matching_products(name in "[A-Za-z ]{0,12}") {
        let catalog = seed::demo_catalog();
        let products = catalog.get_products_by_category(&name);
        prop_assert!(products.iter().all(|p| p.category == name));
    }

    #[test]
    fn review_filter_returns_only_matching_reviews(id in id_strategy()) {
        let catalog = seed::demo_catalog();
        let reviews = catalog.get_reviews_for_product(&id);
        prop_assert!(reviews.iter().all(|r| r.product_id == id));
    }

    #[test]
    fn lookups_are_idempotent(id in id_strategy(), limit in 0usize..16) {
        let catalog = seed::demo_catalog();

        prop_assert_eq!(
            catalog.get_product_by_id(&id),
            catalog.get_product_by_id(&id)
        );
        prop_assert_eq!(
            catalog.get_related_products(&id, None, limit),
            catalog.get_related_products(&id, None, limit)
        );
        prop_assert_eq!(
            catalog.get_reviews_for_product(&id),
            catalog.get_reviews_for_product(&id)
        );
    }

    #[test]
    fn ids_outside_the_seeded_shape_never_resolve(id in "[A-Z]{6,10}") {
        let catalog = seed::demo_catalog();
        prop_assert!(catalog.get_product_by_id(&id).is_none());
    }
}
