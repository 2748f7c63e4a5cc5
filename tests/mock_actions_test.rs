//! Integration tests for the simulated storefront actions: fixed delay,
//! canned outcome, and no effect whatsoever on the catalog.

use std::time::Duration;

use assert_matches::assert_matches;
use storefront_catalog::config::AppConfig;
use storefront_catalog::services::reviews::{ReviewDraft, SubmissionStatus};
use storefront_catalog::services::{MockAuthService, MockReviewService};
use storefront_catalog::{AppState, ServiceError};

fn instant_config() -> AppConfig {
    AppConfig {
        simulated_delay_ms: 0,
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn login_and_register_round_trip() {
    let state = AppState::demo(instant_config());

    let session = state
        .auth
        .login("maya@velora.example", "hunter22")
        .await
        .unwrap();
    assert_eq!(session.display_name, "maya");

    let session = state
        .auth
        .register("Jonas P.", "jonas@velora.example", "longenough")
        .await
        .unwrap();
    assert_eq!(session.display_name, "Jonas P.");
    assert_eq!(session.email, "jonas@velora.example");
}

#[tokio::test]
async fn review_submission_leaves_catalog_untouched() {
    let state = AppState::demo(instant_config());
    let before: Vec<_> = state
        .catalog
        .get_reviews_for_product("1")
        .into_iter()
        .cloned()
        .collect();

    let receipt = state
        .reviews
        .submit_review(ReviewDraft {
            product_id: "1".into(),
            user_name: "Maya K.".into(),
            rating: 5,
            title: None,
            comment: Some("Still love them".into()),
        })
        .await
        .unwrap();

    assert_eq!(receipt.status, SubmissionStatus::Pending);
    assert_eq!(receipt.product_id, "1");

    let after: Vec<_> = state
        .catalog
        .get_reviews_for_product("1")
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(before, after);
}

#[tokio::test]
async fn failure_paths_return_typed_errors() {
    let auth = MockAuthService::new(Duration::from_millis(0));
    assert_matches!(
        auth.login("blocked@velora.example", "whatever1").await,
        Err(ServiceError::AuthError(_))
    );
    assert_matches!(
        auth.register("", "maya@velora.example", "longenough").await,
        Err(ServiceError::ValidationError(_))
    );

    let reviews = MockReviewService::new(Duration::from_millis(0));
    assert_matches!(
        reviews
            .submit_review(ReviewDraft {
                product_id: String::new(),
                user_name: "Maya".into(),
                rating: 4,
                title: None,
                comment: None,
            })
            .await,
        Err(ServiceError::ValidationError(_))
    );
}

#[tokio::test(start_paused = true)]
async fn actions_resolve_after_the_fixed_delay() {
    let config = AppConfig::default(); // 800 ms
    let auth = MockAuthService::from_config(&config);
    let reviews = MockReviewService::from_config(&config);

    let started = tokio::time::Instant::now();
    auth.login("maya@velora.example", "hunter22").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(800));

    let started = tokio::time::Instant::now();
    reviews
        .submit_review(ReviewDraft {
            product_id: "2".into(),
            user_name: "Sam R.".into(),
            rating: 3,
            title: None,
            comment: None,
        })
        .await
        .unwrap();
    assert!(started.elapsed() >= Duration::from_millis(800));
}
