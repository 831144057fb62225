use serde::{Deserialize, Serialize};

use crate::domains::articles::Article;

/// Generated summary with word accounting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub content: String,
    pub key_points: Vec<String>,
    pub word_count: usize,
    /// Percentage of words removed; negative when the summary is longer.
    pub compression_ratio: i32,
}

/// Article plus its summary, as returned by the summarize endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizationResponse {
    pub article: Article,
    pub summary: Summary,
}
