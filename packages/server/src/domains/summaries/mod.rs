//! Stored summaries: per-user history, statistics and the public showcase.

pub mod actions;
pub mod dto;
pub mod models;
pub mod showcase;
pub mod stats;

pub use actions::*;
pub use dto::{ShowcaseStats, ShowcaseSummaryDto, UserSummaryDto};
pub use models::{SummarySort, UserSummary};
pub use showcase::{categorize, popularity, showcase_page};
pub use stats::{StatsCache, UserStats};
