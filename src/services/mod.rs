// Simulated storefront actions
pub mod auth;
pub mod reviews;

pub use auth::MockAuthService;
pub use reviews::MockReviewService;
