use chrono::{DateTime, Utc};
use serde::Serialize;

use super::models::UserSummary;
use crate::common::utils::split_key_points;
use crate::common::SummaryId;

/// A stored summary as shown to its owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: SummaryId,
    pub title: String,
    pub summary_content: String,
    pub key_points: Vec<String>,
    pub original_word_count: i32,
    pub summary_word_count: i32,
    pub compression_ratio: i32,
    pub saved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserSummary> for UserSummaryDto {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id,
            key_points: split_key_points(&summary.key_points),
            title: summary.title,
            summary_content: summary.summary_content,
            original_word_count: summary.original_word_count,
            summary_word_count: summary.summary_word_count,
            compression_ratio: summary.compression_ratio,
            saved: summary.is_saved,
            created_at: summary.created_at,
        }
    }
}

/// Public, anonymized view of a summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseSummaryDto {
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub key_points: Vec<String>,
    pub stats: ShowcaseStats,
    pub category: String,
    pub popularity: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseStats {
    pub original_words: i32,
    pub summary_words: i32,
    pub compression_ratio: i32,
}
