//! Velora Storefront Catalog
//!
//! The data layer of the Velora demo storefront: an immutable in-memory
//! catalog with pure query helpers, plus the storefront's simulated actions
//! (login, register, review submission) that sleep and return canned
//! responses. There is no backend behind any of it.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;

use std::sync::Arc;

pub use catalog::{Catalog, CatalogData};
pub use errors::ServiceError;
pub use models::{Article, Category, FaqItem, Product, Review};

/// Shared application state handed to page-rendering collaborators.
///
/// The catalog is constructed exactly once, here, and only ever shared by
/// reference afterwards. Consumers get read access and nothing else.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: config::AppConfig,
    pub auth: Arc<services::MockAuthService>,
    pub reviews: Arc<services::MockReviewService>,
}

impl AppState {
    /// Assemble state around an already-built catalog.
    pub fn new(catalog: Catalog, config: config::AppConfig) -> Self {
        let auth = Arc::new(services::MockAuthService::from_config(&config));
        let reviews = Arc::new(services::MockReviewService::from_config(&config));
        Self {
            catalog: Arc::new(catalog),
            config,
            auth,
            reviews,
        }
    }

    /// State backed by the seeded demo dataset.
    pub fn demo(config: config::AppConfig) -> Self {
        Self::new(catalog::seed::demo_catalog(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_state_shares_one_catalog() {
        let state = AppState::demo(config::AppConfig::default());
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.catalog, &clone.catalog));
        assert!(state.catalog.get_product_by_id("1").is_some());
    }
}
