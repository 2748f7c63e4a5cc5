use serde::{Deserialize, Serialize};

/// A customer review attached to a product by id.
///
/// `created_at` is a display timestamp string and is never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: String,
    pub product_id: String,
    pub user_id: String,
    pub user_name: String,
    /// Whole-star rating, 1 to 5.
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
}
