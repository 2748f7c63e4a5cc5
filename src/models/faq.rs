use serde::{Deserialize, Serialize};

/// A question/answer pair on the help page.
///
/// FAQ items carry no id; their position in the seeded list is their
/// identity, so ordering must be preserved everywhere they flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}
