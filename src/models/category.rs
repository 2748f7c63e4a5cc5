use serde::{Deserialize, Serialize};

/// A catalog category.
///
/// Categories form a shallow tree through `parent_category_id`, which refers
/// to another category's `id`. The relation is a plain id reference resolved
/// by lookup, not an ownership link. Slugs are not guaranteed unique in the
/// seeded data; slug lookups are first-match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_category_id: Option<String>,
    pub image_url: String,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_category_id.is_none()
    }
}
