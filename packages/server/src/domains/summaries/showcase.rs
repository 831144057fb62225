//! Public showcase of recent summaries.

use anyhow::Result;

use super::dto::{ShowcaseStats, ShowcaseSummaryDto};
use super::models::UserSummary;
use crate::common::utils::{generate_snippet, split_key_points};
use crate::common::{Page, PageRequest, SummaryId};
use crate::kernel::ServerDeps;

pub const DEFAULT_SHOWCASE_SIZE: i64 = 3;

/// Candidate pool size as a multiple of the page size.
const POOL_MULTIPLIER: i64 = 3;

const SNIPPET_CHARS: usize = 150;

/// Title keywords per category, checked in order.
const CATEGORY_KEYWORDS: [(&str, &[&str]); 4] = [
    ("Technology", &["technology", "tech", "ai", "software"]),
    ("Business", &["business", "economy", "finance", "market"]),
    ("Science", &["science", "research", "study"]),
    ("Health", &["health", "medical", "wellness"]),
];

const DEFAULT_CATEGORY: &str = "General";

/// Recent summaries for the landing page, newest first.
///
/// Without a category, pages are cut from the `size * 3` most recent
/// summaries. With one, titles containing it are paged directly.
pub async fn showcase_page(
    page: Option<i64>,
    size: Option<i64>,
    category: Option<&str>,
    deps: &ServerDeps,
) -> Result<Page<ShowcaseSummaryDto>> {
    let request = PageRequest::new(page, size, DEFAULT_SHOWCASE_SIZE);
    let pool = &deps.db_pool;

    let (rows, total) = match category.filter(|c| !c.is_empty()) {
        Some(category) => (
            UserSummary::find_showcase_page_by_category(category, &request, pool).await?,
            UserSummary::count_showcase_by_category(category, pool).await?,
        ),
        None => {
            let pool_size = request.size * POOL_MULTIPLIER;
            (
                UserSummary::find_showcase_page(pool_size, &request, pool).await?,
                UserSummary::count_showcase(pool_size, pool).await?,
            )
        }
    };

    Ok(Page::new(rows, &request, total).map(to_showcase_dto))
}

pub fn to_showcase_dto(summary: UserSummary) -> ShowcaseSummaryDto {
    ShowcaseSummaryDto {
        id: summary.id.to_string(),
        snippet: generate_snippet(&summary.summary_content, SNIPPET_CHARS),
        key_points: split_key_points(&summary.key_points),
        stats: ShowcaseStats {
            original_words: summary.original_word_count,
            summary_words: summary.summary_word_count,
            compression_ratio: summary.compression_ratio,
        },
        category: categorize(&summary.title).to_string(),
        popularity: popularity(summary.id),
        title: summary.title,
    }
}

/// Category from title keywords. Substring match, so "said" counts as AI.
pub fn categorize(title: &str) -> &'static str {
    let lower = title.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Stable score in `80..100` derived from the id.
pub fn popularity(id: SummaryId) -> i32 {
    let last_byte = id.as_uuid().as_bytes()[15];
    80 + i32::from(last_byte % 20)
}
