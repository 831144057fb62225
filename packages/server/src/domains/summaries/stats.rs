//! Per-user statistics and their in-process cache.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::SummaryTotals;
use crate::common::UserId;

/// Reading speed used to turn saved words into minutes.
pub const WORDS_PER_MINUTE: i64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_summaries: i64,
    pub words_saved: i64,
    /// Minutes, truncated.
    pub time_saved: i64,
}

impl From<SummaryTotals> for UserStats {
    fn from(totals: SummaryTotals) -> Self {
        let words_saved = totals.original_words - totals.summary_words;
        Self {
            total_summaries: totals.total_summaries,
            words_saved,
            time_saved: words_saved / WORDS_PER_MINUTE,
        }
    }
}

/// Cached [`UserStats`] keyed by user.
///
/// Entries live until the user stores another summary. Each invalidation
/// bumps the user's generation; a value computed under an older generation
/// is never cached.
#[derive(Clone, Default)]
pub struct StatsCache {
    inner: Arc<RwLock<CacheState>>,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<UserId, UserStats>,
    generations: HashMap<UserId, u64>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user_id: UserId) -> Option<UserStats> {
        self.inner.read().await.entries.get(&user_id).copied()
    }

    /// Token to pass to [`StatsCache::insert_if_current`]. Take it before
    /// reading the totals.
    pub async fn generation(&self, user_id: UserId) -> u64 {
        self.inner
            .read()
            .await
            .generations
            .get(&user_id)
            .copied()
            .unwrap_or(0)
    }

    /// Cache `stats` unless the user was invalidated since `generation` was
    /// taken. Returns whether the value was stored.
    pub async fn insert_if_current(
        &self,
        user_id: UserId,
        generation: u64,
        stats: UserStats,
    ) -> bool {
        let mut state = self.inner.write().await;
        if state.generations.get(&user_id).copied().unwrap_or(0) != generation {
            return false;
        }
        state.entries.insert(user_id, stats);
        true
    }

    pub async fn invalidate(&self, user_id: UserId) {
        let mut state = self.inner.write().await;
        state.entries.remove(&user_id);
        *state.generations.entry(user_id).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_totals() {
        let stats = UserStats::from(SummaryTotals {
            total_summaries: 3,
            original_words: 1500,
            summary_words: 299,
        });
        assert_eq!(stats.total_summaries, 3);
        assert_eq!(stats.words_saved, 1201);
        assert_eq!(stats.time_saved, 6);
    }

    #[test]
    fn test_stats_empty() {
        let stats = UserStats::from(SummaryTotals {
            total_summaries: 0,
            original_words: 0,
            summary_words: 0,
        });
        assert_eq!(
            stats,
            UserStats {
                total_summaries: 0,
                words_saved: 0,
                time_saved: 0
            }
        );
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let json = serde_json::to_value(UserStats {
            total_summaries: 1,
            words_saved: 400,
            time_saved: 2,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"totalSummaries": 1, "wordsSaved": 400, "timeSaved": 2})
        );
    }

    #[tokio::test]
    async fn test_cache_invalidation_is_per_user() {
        let cache = StatsCache::new();
        let alice = UserId::new();
        let bob = UserId::new();
        let stats = UserStats {
            total_summaries: 1,
            words_saved: 10,
            time_saved: 0,
        };

        assert!(cache.insert_if_current(alice, 0, stats).await);
        assert!(cache.insert_if_current(bob, 0, stats).await);
        cache.invalidate(alice).await;

        assert_eq!(cache.get(alice).await, None);
        assert_eq!(cache.get(bob).await, Some(stats));
    }

    #[tokio::test]
    async fn test_totals_read_before_invalidation_are_not_cached() {
        let cache = StatsCache::new();
        let user = UserId::new();
        let stale = UserStats {
            total_summaries: 1,
            words_saved: 10,
            time_saved: 0,
        };

        // A reader takes the generation, then a writer stores a summary
        // before the reader's totals come back.
        let generation = cache.generation(user).await;
        cache.invalidate(user).await;

        assert!(!cache.insert_if_current(user, generation, stale).await);
        assert_eq!(cache.get(user).await, None);

        let fresh = UserStats {
            total_summaries: 2,
            ..stale
        };
        let generation = cache.generation(user).await;
        assert!(cache.insert_if_current(user, generation, fresh).await);
        assert_eq!(cache.get(user).await, Some(fresh));
    }
}
