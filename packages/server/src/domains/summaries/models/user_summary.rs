use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{PageRequest, SortOrder, SummaryId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserSummary {
    pub id: SummaryId,
    pub user_id: UserId,
    pub title: String,
    pub original_content: String,
    pub summary_content: String,
    /// Key points joined with `|`.
    pub key_points: String,
    pub original_word_count: i32,
    pub summary_word_count: i32,
    pub compression_ratio: i32,
    pub is_saved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new row.
#[derive(Debug, Clone)]
pub struct NewUserSummary<'a> {
    pub user_id: UserId,
    pub title: &'a str,
    pub original_content: &'a str,
    pub summary_content: &'a str,
    pub key_points: &'a str,
    pub original_word_count: i32,
    pub summary_word_count: i32,
    pub compression_ratio: i32,
}

/// Sortable columns for a user's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummarySort {
    #[default]
    CreatedAt,
    Title,
    WordCount,
}

impl SummarySort {
    /// `title` and `wordcount` (any case) select those columns; anything
    /// else sorts by creation time.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("title") => SummarySort::Title,
            Some("wordcount") => SummarySort::WordCount,
            _ => SummarySort::CreatedAt,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            SummarySort::CreatedAt => "created_at",
            SummarySort::Title => "title",
            SummarySort::WordCount => "original_word_count",
        }
    }
}

/// Aggregates over one user's rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct SummaryTotals {
    pub total_summaries: i64,
    pub original_words: i64,
    pub summary_words: i64,
}

// =============================================================================
// UserSummary Queries
// =============================================================================

impl UserSummary {
    pub async fn create(new: NewUserSummary<'_>, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO user_summaries (
                id, user_id, title, original_content, summary_content, key_points,
                original_word_count, summary_word_count, compression_ratio
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(SummaryId::new())
        .bind(new.user_id)
        .bind(new.title)
        .bind(new.original_content)
        .bind(new.summary_content)
        .bind(new.key_points)
        .bind(new.original_word_count)
        .bind(new.summary_word_count)
        .bind(new.compression_ratio)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Only returns the row when it belongs to `user_id`.
    pub async fn find_by_id_for_user(
        id: SummaryId,
        user_id: UserId,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM user_summaries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// One page of a user's history, optionally filtered by saved flag.
    pub async fn find_page_for_user(
        user_id: UserId,
        saved: Option<bool>,
        sort: SummarySort,
        order: SortOrder,
        page: &PageRequest,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        // Column and direction come from closed enums, never from input.
        let query = format!(
            r#"
            SELECT * FROM user_summaries
            WHERE user_id = $1 AND ($2::BOOLEAN IS NULL OR is_saved = $2)
            ORDER BY {} {}, id {}
            LIMIT $3 OFFSET $4
            "#,
            sort.column(),
            order.as_sql(),
            order.as_sql()
        );

        sqlx::query_as::<_, Self>(&query)
            .bind(user_id)
            .bind(saved)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn count_for_user(
        user_id: UserId,
        saved: Option<bool>,
        pool: &PgPool,
    ) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM user_summaries WHERE user_id = $1 AND ($2::BOOLEAN IS NULL OR is_saved = $2)",
        )
        .bind(user_id)
        .bind(saved)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Set the saved flag. Returns false when no row matched `id` for `user_id`.
    pub async fn set_saved(
        id: SummaryId,
        user_id: UserId,
        saved: bool,
        pool: &PgPool,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE user_summaries SET is_saved = $3, updated_at = NOW() WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .bind(saved)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn stats_for_user(user_id: UserId, pool: &PgPool) -> Result<SummaryTotals> {
        sqlx::query_as::<_, SummaryTotals>(
            r#"
            SELECT
                COUNT(*) AS total_summaries,
                COALESCE(SUM(original_word_count), 0)::BIGINT AS original_words,
                COALESCE(SUM(summary_word_count), 0)::BIGINT AS summary_words
            FROM user_summaries
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// A page cut from the `pool_size` most recent summaries of all users.
    pub async fn find_showcase_page(
        pool_size: i64,
        page: &PageRequest,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM (
                SELECT * FROM user_summaries
                ORDER BY created_at DESC, id DESC
                LIMIT $1
            ) recent
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pool_size)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Size of the showcase candidate pool.
    pub async fn count_showcase(pool_size: i64, pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT LEAST(COUNT(*), $1) FROM user_summaries")
            .bind(pool_size)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Most recent summaries whose title contains `category`, any case.
    pub async fn find_showcase_page_by_category(
        category: &str,
        page: &PageRequest,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM user_summaries
            WHERE title ILIKE '%' || $1 || '%'
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(escape_like(category))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn count_showcase_by_category(category: &str, pool: &PgPool) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM user_summaries WHERE title ILIKE '%' || $1 || '%'",
        )
        .bind(escape_like(category))
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

/// Treat `%`, `_` and `\` in user input as literals inside ILIKE.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
