//! The read-only catalog store.
//!
//! The catalog is built once at startup from a [`CatalogData`] bundle and is
//! immutable for the life of the process, which makes it safe to share across
//! any number of concurrent readers without locks. Every query is an
//! unindexed linear scan preserving insertion order; the dataset is tens of
//! records, so indexing would be machinery without a payoff.

pub mod seed;

use crate::models::{Article, Category, FaqItem, Product, Review};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The raw collections a [`Catalog`] is built from.
///
/// Kept separate from the store so tests and embedders can construct a
/// catalog from their own fixtures instead of the demo dataset.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogData {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub articles: Vec<Article>,
    pub faqs: Vec<FaqItem>,
    pub reviews: Vec<Review>,
    pub shipping_policy: String,
    pub return_policy: String,
}

/// Immutable in-memory catalog with pure lookup helpers.
///
/// Lookups never fail: a miss is `None` or an empty `Vec`. Construct one at
/// process start and pass it by reference (or `Arc`) to consumers.
#[derive(Clone, Debug)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    articles: Vec<Article>,
    faqs: Vec<FaqItem>,
    reviews: Vec<Review>,
    shipping_policy: String,
    return_policy: String,
}

impl Catalog {
    pub fn new(data: CatalogData) -> Self {
        let catalog = Self {
            products: data.products,
            categories: data.categories,
            articles: data.articles,
            faqs: data.faqs,
            reviews: data.reviews,
            shipping_policy: data.shipping_policy,
            return_policy: data.return_policy,
        };
        debug!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            articles = catalog.articles.len(),
            reviews = catalog.reviews.len(),
            "catalog store initialized"
        );
        catalog
    }

    /// Get a product by id. First match wins; ids are unique at authoring
    /// time but the store does not enforce it.
    pub fn get_product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products whose denormalized category name equals `category`.
    ///
    /// Matching is exact and case-sensitive, never resolved through the
    /// category tree. Insertion order is preserved.
    pub fn get_products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Products shown alongside a product page: everything except
    /// `exclude_id`, optionally restricted to one category, truncated to
    /// `limit`. First-N in original order; there is no ranking.
    pub fn get_related_products(
        &self,
        exclude_id: &str,
        category: Option<&str>,
        limit: usize,
    ) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id != exclude_id)
            .filter(|p| category.map_or(true, |c| p.category == c))
            .take(limit)
            .collect()
    }

    /// Get a category by slug. Slugs are not guaranteed unique in the seeded
    /// data, so this is first-match.
    pub fn get_category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    pub fn get_article_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    /// All articles, optionally filtered by editorial category (exact match).
    pub fn get_articles(&self, category: Option<&str>) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| category.map_or(true, |c| a.category == c))
            .collect()
    }

    /// The help-page FAQ entries in their fixed authored order.
    pub fn get_faqs(&self) -> &[FaqItem] {
        &self.faqs
    }

    /// Reviews for one product, in insertion order.
    pub fn get_reviews_for_product(&self, product_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .collect()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn shipping_policy(&self) -> &str {
        &self.shipping_policy
    }

    pub fn return_policy(&self) -> &str {
        &self.return_policy
    }
}
