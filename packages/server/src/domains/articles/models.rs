use serde::{Deserialize, Serialize};

/// Article text ready for summarization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub content: String,
    pub word_count: usize,
}
