use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::ServiceError;

/// What a customer types into the review form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub product_id: String,
    pub user_name: String,
    /// Whole-star rating, 1 to 5.
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Accepted and queued for moderation. The only status the mock issues.
    Pending,
}

/// The canned acknowledgement the review form shows after submitting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReceipt {
    pub review_id: String,
    pub product_id: String,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
}

/// Simulated review submission.
///
/// Validates the draft, sleeps for the configured delay, and returns a
/// pending receipt. The submitted review is NOT added to the catalog; the
/// store stays immutable and the product page keeps showing the seeded
/// reviews.
#[derive(Clone, Debug)]
pub struct MockReviewService {
    delay: Duration,
}

impl MockReviewService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.simulated_delay())
    }

    #[instrument(skip(self), fields(product_id = %draft.product_id))]
    pub async fn submit_review(&self, draft: ReviewDraft) -> Result<ReviewReceipt, ServiceError> {
        if draft.product_id.trim().is_empty() {
            return Err(ServiceError::validation("product id must not be empty"));
        }
        if draft.user_name.trim().is_empty() {
            return Err(ServiceError::validation("name must not be empty"));
        }
        if !(1..=5).contains(&draft.rating) {
            return Err(ServiceError::validation("rating must be between 1 and 5"));
        }

        tokio::time::sleep(self.delay).await;

        let receipt = ReviewReceipt {
            review_id: Uuid::new_v4().to_string(),
            product_id: draft.product_id,
            status: SubmissionStatus::Pending,
            submitted_at: Utc::now(),
        };
        info!(review_id = %receipt.review_id, "review submission simulated");
        Ok(receipt)
    }
}
