//! Summary history actions for authenticated users.

use anyhow::Result;
use tracing::{debug, info};

use super::dto::UserSummaryDto;
use super::models::{NewUserSummary, SummarySort, UserSummary};
use super::stats::UserStats;
use crate::common::utils::{join_key_points, to_db_count};
use crate::common::{Page, PageRequest, SortOrder, SummaryId, UserId};
use crate::domains::summarization::SummarizationResponse;
use crate::kernel::ServerDeps;

pub const DEFAULT_HISTORY_SIZE: i64 = 10;

/// Store a finished summarization for `user_id` and drop their cached stats.
pub async fn create_user_summary(
    user_id: UserId,
    response: &SummarizationResponse,
    original_content: &str,
    deps: &ServerDeps,
) -> Result<UserSummary> {
    let key_points = join_key_points(&response.summary.key_points);

    let summary = UserSummary::create(
        NewUserSummary {
            user_id,
            title: &response.article.title,
            original_content,
            summary_content: &response.summary.content,
            key_points: &key_points,
            original_word_count: to_db_count(response.article.word_count),
            summary_word_count: to_db_count(response.summary.word_count),
            compression_ratio: response.summary.compression_ratio,
        },
        &deps.db_pool,
    )
    .await?;

    deps.stats_cache.invalidate(user_id).await;

    info!(user_id = %user_id, summary_id = %summary.id, "Stored user summary");
    Ok(summary)
}

/// One page of a user's history.
pub async fn list_user_summaries(
    user_id: UserId,
    page: Option<i64>,
    size: Option<i64>,
    saved: Option<bool>,
    sort_by: Option<&str>,
    sort_order: Option<&str>,
    deps: &ServerDeps,
) -> Result<Page<UserSummaryDto>> {
    let request = PageRequest::new(page, size, DEFAULT_HISTORY_SIZE);
    let sort = SummarySort::parse(sort_by);
    let order = SortOrder::parse(sort_order);

    let rows =
        UserSummary::find_page_for_user(user_id, saved, sort, order, &request, &deps.db_pool)
            .await?;
    let total = UserSummary::count_for_user(user_id, saved, &deps.db_pool).await?;

    Ok(Page::new(rows, &request, total).map(UserSummaryDto::from))
}

/// `None` when the summary does not exist or belongs to someone else.
pub async fn get_user_summary(
    user_id: UserId,
    id: SummaryId,
    deps: &ServerDeps,
) -> Result<Option<UserSummaryDto>> {
    let summary = UserSummary::find_by_id_for_user(id, user_id, &deps.db_pool).await?;
    Ok(summary.map(UserSummaryDto::from))
}

/// Mark a summary saved or unsaved. `false` means not found for this user.
pub async fn toggle_saved(
    user_id: UserId,
    id: SummaryId,
    saved: bool,
    deps: &ServerDeps,
) -> Result<bool> {
    let updated = UserSummary::set_saved(id, user_id, saved, &deps.db_pool).await?;
    debug!(user_id = %user_id, summary_id = %id, saved, updated, "Toggled saved flag");
    Ok(updated)
}

/// Totals for the user's dashboard, served from the stats cache when warm.
pub async fn get_user_stats(user_id: UserId, deps: &ServerDeps) -> Result<UserStats> {
    if let Some(stats) = deps.stats_cache.get(user_id).await {
        return Ok(stats);
    }

    let generation = deps.stats_cache.generation(user_id).await;
    let stats = UserStats::from(UserSummary::stats_for_user(user_id, &deps.db_pool).await?);
    if !deps.stats_cache.insert_if_current(user_id, generation, stats).await {
        debug!(user_id = %user_id, "Stats changed while computing; not cached");
    }
    Ok(stats)
}
