//! Integration tests that drive the catalog store the way the storefront
//! pages do: product page, category landing, blog, help.

use rstest::rstest;
use serde_json::json;
use storefront_catalog::catalog::seed;
use storefront_catalog::Catalog;

fn catalog() -> Catalog {
    seed::demo_catalog()
}

#[test]
fn product_page_flow() {
    let catalog = catalog();

    let product = catalog.get_product_by_id("1").expect("seeded product");
    assert_eq!(product.name, "Aurora Knit Runner");
    assert_eq!(product.discount_percent(), Some(20));

    let reviews = catalog.get_reviews_for_product("1");
    let ids: Vec<&str> = reviews.iter().map(|r| r.review_id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);

    let related = catalog.get_related_products("1", Some(&product.category), 4);
    assert!(related.len() <= 4);
    assert!(related.iter().all(|p| p.id != "1"));
    assert!(related.iter().all(|p| p.category == product.category));
}

#[test]
fn sneakers_landing_page_flow() {
    let catalog = catalog();

    let category = catalog
        .get_category_by_slug("sneakers")
        .expect("sneakers category");
    assert_eq!(category.name, "Sneakers");
    assert_eq!(category.parent_category_id.as_deref(), Some("footwear"));

    let products = catalog.get_products_by_category(&category.name);
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| p.category == "Sneakers"));
}

#[rstest]
#[case("footwear", "Footwear")]
#[case("sneakers", "Sneakers")]
#[case("boots", "Boots")]
#[case("apparel", "Apparel")]
#[case("accessories", "Accessories")]
fn category_slugs_resolve(#[case] slug: &str, #[case] name: &str) {
    let catalog = catalog();
    let category = catalog.get_category_by_slug(slug).expect("known slug");
    assert_eq!(category.name, name);
}

#[test]
fn misses_are_empty_not_errors() {
    let catalog = catalog();
    assert!(catalog.get_product_by_id("9999").is_none());
    assert!(catalog.get_category_by_slug("no-such-slug").is_none());
    assert!(catalog.get_article_by_slug("no-such-article").is_none());
    assert!(catalog.get_products_by_category("Gadgets").is_empty());
    assert!(catalog.get_reviews_for_product("9999").is_empty());
    assert!(catalog.get_articles(Some("Gossip")).is_empty());
}

#[test]
fn blog_page_flow() {
    let catalog = catalog();

    let all = catalog.get_articles(None);
    assert_eq!(all.len(), catalog.articles().len());

    let guides = catalog.get_articles(Some("Guides"));
    assert!(guides.len() >= 2);
    assert!(guides.iter().all(|a| a.category == "Guides"));

    let article = catalog
        .get_article_by_slug("sneaker-care-101")
        .expect("seeded article");
    assert_eq!(article.author, "Elena Ruiz");
    assert!(article.content.contains("<p>"));
}

#[test]
fn help_page_flow() {
    let catalog = catalog();

    let faqs = catalog.get_faqs();
    assert!(faqs.len() >= 5);
    // position is identity for FAQ entries
    assert!(faqs[0].question.contains("shipping"));

    assert!(catalog.shipping_policy().contains("Shipping"));
    assert!(catalog.return_policy().contains("30 days"));
}

#[test]
fn entities_serialize_with_storefront_field_names() {
    let catalog = catalog();

    let product = serde_json::to_value(catalog.get_product_by_id("1").unwrap()).unwrap();
    assert_eq!(product["originalPrice"], json!("249.99"));
    assert_eq!(product["reviewsCount"], json!(128));
    assert!(product["imageUrl"].is_string());

    let category = serde_json::to_value(catalog.get_category_by_slug("sneakers").unwrap()).unwrap();
    assert_eq!(category["parentCategoryId"], json!("footwear"));

    let review = serde_json::to_value(catalog.get_reviews_for_product("1")[0]).unwrap();
    assert_eq!(review["productId"], json!("1"));
    assert_eq!(review["createdAt"], json!("2024-11-02T09:14:00Z"));
}

#[test]
fn discounts_only_appear_on_marked_down_products() {
    let catalog = catalog();
    for product in catalog.products() {
        match (product.original_price, product.discount_percent()) {
            (Some(original), Some(_)) => assert!(original > product.price),
            (Some(original), None) => assert!(original <= product.price),
            (None, discount) => assert_eq!(discount, None),
        }
    }
}
