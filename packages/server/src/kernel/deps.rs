//! Server dependencies for handlers and domain actions (using traits for testability)
//!
//! External services sit behind the `Base*` traits so tests can swap in the
//! mocks from `test_dependencies`.

use sqlx::PgPool;
use std::sync::Arc;

use crate::domains::auth::JwtService;
use crate::domains::summaries::StatsCache;
use crate::kernel::{BaseAI, BaseArticleScraper};

/// Shared dependencies for request handling.
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// LLM used for summarization.
    pub ai: Arc<dyn BaseAI>,
    /// Fetches and extracts articles for URL summarization.
    pub scraper: Arc<dyn BaseArticleScraper>,
    /// JWT service for token creation
    pub jwt_service: Arc<JwtService>,
    /// Per-user statistics, invalidated when the user stores a summary.
    pub stats_cache: StatsCache,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        ai: Arc<dyn BaseAI>,
        scraper: Arc<dyn BaseArticleScraper>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            db_pool,
            ai,
            scraper,
            jwt_service,
            stats_cache: StatsCache::new(),
        }
    }
}
