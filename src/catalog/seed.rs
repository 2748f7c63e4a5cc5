//! The demo dataset for the Velora storefront.
//!
//! Hard-coded records standing in for a real database. The collections are
//! authored in display order and the store preserves that order, so the
//! sequencing below is load-bearing (FAQ identity, review listings, the
//! duplicate category slug).

use super::{Catalog, CatalogData};
use crate::models::{Article, Category, FaqItem, Product, Review};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// Build a [`Catalog`] from the demo dataset.
pub fn demo_catalog() -> Catalog {
    Catalog::new(demo_data())
}

/// The raw demo collections, for embedders that want to adjust a fixture
/// before constructing the store.
pub fn demo_data() -> CatalogData {
    CatalogData {
        products: products(),
        categories: categories(),
        articles: articles(),
        faqs: faqs(),
        reviews: reviews(),
        shipping_policy: SHIPPING_POLICY.to_string(),
        return_policy: RETURN_POLICY.to_string(),
    }
}

fn details(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "footwear".into(),
            name: "Footwear".into(),
            slug: "footwear".into(),
            description: Some("Sneakers, boots and sandals for every season.".into()),
            parent_category_id: None,
            image_url: "https://images.velora.example/categories/footwear.jpg".into(),
        },
        Category {
            id: "sneakers".into(),
            name: "Sneakers".into(),
            slug: "sneakers".into(),
            description: Some("Everyday runners and court classics.".into()),
            parent_category_id: Some("footwear".into()),
            image_url: "https://images.velora.example/categories/sneakers.jpg".into(),
        },
        Category {
            id: "boots".into(),
            name: "Boots".into(),
            slug: "boots".into(),
            description: Some("From trail hikers to city chelseas.".into()),
            parent_category_id: Some("footwear".into()),
            image_url: "https://images.velora.example/categories/boots.jpg".into(),
        },
        Category {
            // Slug collides with the Sneakers entry above. The upstream
            // dataset ships this way and slug lookup is first-match, so
            // "sneakers" keeps resolving to Sneakers. Do not dedupe here
            // without sign-off from whoever owns the table.
            id: "sandals".into(),
            name: "Sandals".into(),
            slug: "sneakers".into(),
            description: Some("Slides and strap sandals for warm days.".into()),
            parent_category_id: Some("footwear".into()),
            image_url: "https://images.velora.example/categories/sandals.jpg".into(),
        },
        Category {
            id: "apparel".into(),
            name: "Apparel".into(),
            slug: "apparel".into(),
            description: Some("Tees, hoodies and technical outerwear.".into()),
            parent_category_id: None,
            image_url: "https://images.velora.example/categories/apparel.jpg".into(),
        },
        Category {
            id: "accessories".into(),
            name: "Accessories".into(),
            slug: "accessories".into(),
            description: None,
            parent_category_id: None,
            image_url: "https://images.velora.example/categories/accessories.jpg".into(),
        },
    ]
}

fn products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            name: "Aurora Knit Runner".into(),
            slug: "aurora-knit-runner".into(),
            category: "Sneakers".into(),
            subcategory: Some("Road Running".into()),
            brand: Some("Velora".into()),
            price: dec!(199.99),
            original_price: Some(dec!(249.99)),
            image_url: "https://images.velora.example/products/aurora-knit-runner.jpg".into(),
            additional_images: vec![
                "https://images.velora.example/products/aurora-knit-runner-side.jpg".into(),
                "https://images.velora.example/products/aurora-knit-runner-sole.jpg".into(),
            ],
            description: "A featherweight daily trainer with a breathable engineered-knit \
                          upper and responsive foam midsole."
                .into(),
            rating: 4.7,
            reviews_count: 128,
            stock: Some(34),
            details: details(&[
                ("Upper", "Engineered knit"),
                ("Midsole", "VeloFoam"),
                ("Drop", "8 mm"),
                ("Weight", "238 g (US 9)"),
            ]),
            is_active: Some(true),
            is_featured: Some(true),
        },
        Product {
            id: "2".into(),
            name: "Court Classic Low".into(),
            slug: "court-classic-low".into(),
            category: "Sneakers".into(),
            subcategory: None,
            brand: Some("Velora".into()),
            price: dec!(89.99),
            original_price: None,
            image_url: "https://images.velora.example/products/court-classic-low.jpg".into(),
            additional_images: Vec::new(),
            description: "A clean leather low-top that pairs with everything.".into(),
            rating: 4.4,
            reviews_count: 86,
            stock: Some(112),
            details: details(&[("Upper", "Full-grain leather"), ("Outsole", "Cupsole rubber")]),
            is_active: Some(true),
            is_featured: None,
        },
        Product {
            id: "3".into(),
            name: "Trailbreaker GTX".into(),
            slug: "trailbreaker-gtx".into(),
            category: "Sneakers".into(),
            subcategory: Some("Trail".into()),
            brand: Some("Northpeak".into()),
            price: dec!(159.00),
            original_price: Some(dec!(189.00)),
            image_url: "https://images.velora.example/products/trailbreaker-gtx.jpg".into(),
            additional_images: vec![
                "https://images.velora.example/products/trailbreaker-gtx-tread.jpg".into(),
            ],
            description: "Waterproof trail runner with an aggressive lug pattern for \
                          soft-ground grip."
                .into(),
            rating: 4.6,
            reviews_count: 59,
            stock: Some(12),
            details: details(&[("Membrane", "GORE-TEX"), ("Lug depth", "5 mm")]),
            is_active: Some(true),
            is_featured: None,
        },
        Product {
            id: "4".into(),
            name: "Sierra Hiker".into(),
            slug: "sierra-hiker".into(),
            category: "Boots".into(),
            subcategory: None,
            brand: Some("Northpeak".into()),
            price: dec!(219.50),
            original_price: None,
            image_url: "https://images.velora.example/products/sierra-hiker.jpg".into(),
            additional_images: Vec::new(),
            description: "A supportive mid-cut hiking boot built for loaded multi-day trips.".into(),
            rating: 4.8,
            reviews_count: 203,
            stock: Some(8),
            details: details(&[
                ("Upper", "Nubuck leather"),
                ("Shank", "Full-length nylon"),
                ("Resoleable", "Yes"),
            ]),
            is_active: Some(true),
            is_featured: Some(true),
        },
        Product {
            id: "5".into(),
            name: "Harbor Chelsea Boot".into(),
            slug: "harbor-chelsea-boot".into(),
            category: "Boots".into(),
            subcategory: None,
            brand: Some("Velora".into()),
            price: dec!(179.99),
            original_price: Some(dec!(199.99)),
            image_url: "https://images.velora.example/products/harbor-chelsea-boot.jpg".into(),
            additional_images: Vec::new(),
            description: "Weatherproof suede chelsea with an elastic gore and lugged sole.".into(),
            rating: 4.3,
            reviews_count: 41,
            stock: None,
            details: None,
            is_active: Some(true),
            is_featured: None,
        },
        Product {
            id: "6".into(),
            name: "Drift Slide".into(),
            slug: "drift-slide".into(),
            category: "Sandals".into(),
            subcategory: None,
            brand: Some("Velora".into()),
            price: dec!(39.99),
            original_price: None,
            image_url: "https://images.velora.example/products/drift-slide.jpg".into(),
            additional_images: Vec::new(),
            description: "A contoured recovery slide for after the run.".into(),
            rating: 4.1,
            reviews_count: 17,
            stock: Some(64),
            details: None,
            is_active: Some(true),
            is_featured: None,
        },
        Product {
            id: "7".into(),
            name: "Cove Strap Sandal".into(),
            slug: "cove-strap-sandal".into(),
            category: "Sandals".into(),
            subcategory: None,
            brand: None,
            price: dec!(54.99),
            original_price: Some(dec!(64.99)),
            image_url: "https://images.velora.example/products/cove-strap-sandal.jpg".into(),
            additional_images: Vec::new(),
            description: "Adjustable three-strap sandal with a grippy river-ready outsole.".into(),
            rating: 4.2,
            reviews_count: 23,
            stock: None,
            details: None,
            is_active: Some(true),
            is_featured: None,
        },
        Product {
            id: "8".into(),
            name: "Merino Crew Tee".into(),
            slug: "merino-crew-tee".into(),
            category: "Apparel".into(),
            subcategory: Some("Tops".into()),
            brand: Some("Velora".into()),
            price: dec!(45.00),
            original_price: None,
            image_url: "https://images.velora.example/products/merino-crew-tee.jpg".into(),
            additional_images: Vec::new(),
            description: "Soft 150 gsm merino tee that stays fresh for days of wear.".into(),
            rating: 4.5,
            reviews_count: 77,
            stock: Some(140),
            details: details(&[("Fabric", "100% merino wool"), ("Weight", "150 gsm")]),
            is_active: Some(true),
            is_featured: None,
        },
        Product {
            id: "9".into(),
            name: "Storm Shell Jacket".into(),
            slug: "storm-shell-jacket".into(),
            category: "Apparel".into(),
            subcategory: Some("Outerwear".into()),
            brand: Some("Northpeak".into()),
            price: dec!(249.00),
            original_price: Some(dec!(299.00)),
            image_url: "https://images.velora.example/products/storm-shell-jacket.jpg".into(),
            additional_images: vec![
                "https://images.velora.example/products/storm-shell-jacket-hood.jpg".into(),
            ],
            description: "A three-layer hard shell with pit zips and a helmet-compatible hood.".into(),
            rating: 4.9,
            reviews_count: 164,
            stock: Some(21),
            details: details(&[
                ("Waterproofing", "20k mm"),
                ("Breathability", "20k g/m²"),
                ("Seams", "Fully taped"),
            ]),
            is_active: Some(true),
            is_featured: Some(true),
        },
        Product {
            id: "10".into(),
            name: "Everyday Hoodie".into(),
            slug: "everyday-hoodie".into(),
            category: "Apparel".into(),
            subcategory: Some("Tops".into()),
            brand: Some("Velora".into()),
            price: dec!(98.00),
            original_price: None,
            image_url: "https://images.velora.example/products/everyday-hoodie.jpg".into(),
            additional_images: Vec::new(),
            description: "Heavyweight loopback fleece with a doubled hood.".into(),
            rating: 4.4,
            reviews_count: 52,
            stock: Some(57),
            details: None,
            is_active: Some(true),
            is_featured: None,
        },
        Product {
            id: "11".into(),
            name: "Trail Cap".into(),
            slug: "trail-cap".into(),
            category: "Accessories".into(),
            subcategory: None,
            brand: Some("Northpeak".into()),
            price: dec!(28.00),
            original_price: None,
            image_url: "https://images.velora.example/products/trail-cap.jpg".into(),
            additional_images: Vec::new(),
            description: "Quick-dry five-panel cap with a packable brim.".into(),
            rating: 4.0,
            reviews_count: 12,
            stock: None,
            details: None,
            is_active: Some(true),
            is_featured: None,
        },
        Product {
            // Discontinued colorway; kept in the dataset so old order pages
            // can still resolve it, hidden from listings via is_active.
            id: "12".into(),
            name: "Wool Runner Socks (3-Pack)".into(),
            slug: "wool-runner-socks-3-pack".into(),
            category: "Accessories".into(),
            subcategory: None,
            brand: Some("Velora".into()),
            price: dec!(24.00),
            original_price: None,
            image_url: "https://images.velora.example/products/wool-runner-socks.jpg".into(),
            additional_images: Vec::new(),
            description: "Cushioned merino-blend crew socks, sized to stay put.".into(),
            rating: 4.6,
            reviews_count: 95,
            stock: Some(0),
            details: None,
            is_active: Some(false),
            is_featured: None,
        },
    ]
}

fn reviews() -> Vec<Review> {
    vec![
        Review {
            review_id: "r1".into(),
            product_id: "1".into(),
            user_id: "u101".into(),
            user_name: "Maya K.".into(),
            rating: 5,
            title: Some("Lightest runner I've owned".into()),
            comment: Some(
                "Disappears on your foot. I sized true and the knit broke in within a week."
                    .into(),
            ),
            created_at: "2024-11-02T09:14:00Z".into(),
            is_approved: Some(true),
        },
        Review {
            review_id: "r2".into(),
            product_id: "1".into(),
            user_id: "u215".into(),
            user_name: "Jonas P.".into(),
            rating: 4,
            title: None,
            comment: Some("Great ride, but runs a touch narrow in the toe box.".into()),
            created_at: "2024-12-18T17:40:00Z".into(),
            is_approved: Some(true),
        },
        Review {
            review_id: "r3".into(),
            product_id: "4".into(),
            user_id: "u322".into(),
            user_name: "Priya S.".into(),
            rating: 5,
            title: Some("Carried 18 kg through the Dolomites".into()),
            comment: Some("Zero hot spots after three days straight. Worth every gram.".into()),
            created_at: "2025-01-07T08:02:00Z".into(),
            is_approved: Some(true),
        },
        Review {
            review_id: "r4".into(),
            product_id: "9".into(),
            user_id: "u108".into(),
            user_name: "Alex T.".into(),
            rating: 5,
            title: None,
            comment: Some("Sat out a full day of sideways rain and stayed dry.".into()),
            created_at: "2025-02-21T19:55:00Z".into(),
            is_approved: Some(true),
        },
        Review {
            review_id: "r5".into(),
            product_id: "2".into(),
            user_id: "u441".into(),
            user_name: "Sam R.".into(),
            rating: 3,
            title: Some("Stiff out of the box".into()),
            comment: None,
            created_at: "2025-03-30T12:11:00Z".into(),
            is_approved: None,
        },
    ]
}

fn articles() -> Vec<Article> {
    vec![
        Article {
            id: "a1".into(),
            slug: "sneaker-care-101".into(),
            title: "Sneaker Care 101".into(),
            excerpt: "Keep knit uppers and white midsoles looking new with five minutes a week."
                .into(),
            image_url: "https://images.velora.example/blog/sneaker-care-101.jpg".into(),
            category: "Guides".into(),
            author: "Elena Ruiz".into(),
            date: "March 4, 2025".into(),
            content: "<p>Knit uppers shrug off most dirt with a soft brush and cold water. \
                      Skip the washing machine: heat warps midsole foam and yellows the \
                      sidewalls.</p><p>For white rubber, a melamine sponge works faster than \
                      any dedicated cleaner.</p>"
                .into(),
            tags: Some(vec!["care".into(), "sneakers".into()]),
        },
        Article {
            id: "a2".into(),
            slug: "how-to-break-in-hiking-boots".into(),
            title: "How to Break In Hiking Boots".into(),
            excerpt: "Do it at home, not at kilometre twelve of day one.".into(),
            image_url: "https://images.velora.example/blog/break-in-hiking-boots.jpg".into(),
            category: "Guides".into(),
            author: "Tom Adler".into(),
            date: "April 22, 2025".into(),
            content: "<p>Wear new boots around the house for a few evenings with your hiking \
                      socks, then graduate to short loaded walks. Leather needs time to set \
                      to your foot shape; forcing it on a long day is how blisters happen.</p>"
                .into(),
            tags: Some(vec!["boots".into(), "hiking".into()]),
        },
        Article {
            id: "a3".into(),
            slug: "behind-the-aurora-knit".into(),
            title: "Behind the Aurora Knit".into(),
            excerpt: "Two years and forty-one prototypes to shave thirty grams.".into(),
            image_url: "https://images.velora.example/blog/behind-the-aurora-knit.jpg".into(),
            category: "Stories".into(),
            author: "Velora Team".into(),
            date: "June 10, 2025".into(),
            content: "<p>The Aurora started as a question: how much shoe can you remove \
                      before the ride falls apart? The answer took our materials team \
                      through forty-one knit patterns.</p>"
                .into(),
            tags: None,
        },
    ]
}

fn faqs() -> Vec<FaqItem> {
    vec![
        FaqItem {
            question: "How long does standard shipping take?".into(),
            answer: "Standard shipping arrives in 3-5 business days. Orders over $75 ship free."
                .into(),
        },
        FaqItem {
            question: "Can I change or cancel my order?".into(),
            answer: "Orders can be changed or cancelled within one hour of purchase from your \
                     account page."
                .into(),
        },
        FaqItem {
            question: "What is your return window?".into(),
            answer: "Unworn items can be returned within 30 days of delivery for a full refund."
                .into(),
        },
        FaqItem {
            question: "Do your shoes run true to size?".into(),
            answer: "Most styles run true. Product pages note when a style runs narrow or long."
                .into(),
        },
        FaqItem {
            question: "Do you ship internationally?".into(),
            answer: "We currently ship to the US, Canada, the UK and the EU. Duties are \
                     calculated at checkout."
                .into(),
        },
        FaqItem {
            question: "How do I start a warranty claim?".into(),
            answer: "Email support@velora.example with your order number and photos of the \
                     issue; we respond within two business days."
                .into(),
        },
    ]
}

const SHIPPING_POLICY: &str = "<h2>Shipping</h2><p>Orders placed before 2pm ET ship the same \
business day. Standard shipping (3-5 business days) is free on orders over $75; expedited \
two-day and overnight options are available at checkout.</p><p>Once your order ships you'll \
receive a tracking link by email. We do not currently ship to PO boxes.</p>";

const RETURN_POLICY: &str = "<h2>Returns</h2><p>We accept returns of unworn items in their \
original packaging within 30 days of delivery. Start a return from your account page and \
we'll email a prepaid label; refunds post to the original payment method within 5 business \
days of the item reaching our warehouse.</p><p>Final-sale items and worn footwear can't be \
returned, but our warranty still covers manufacturing defects for one year.</p>";
