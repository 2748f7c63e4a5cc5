use serde::{Deserialize, Serialize};

/// A blog article. `date` is a display string and is never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    /// Free-text editorial category, unrelated to catalog categories.
    pub category: String,
    pub author: String,
    pub date: String,
    /// HTML fragment rendered as-is by the blog page.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
