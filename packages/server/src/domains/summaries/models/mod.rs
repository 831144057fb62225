pub mod user_summary;

pub use user_summary::{NewUserSummary, SummarySort, SummaryTotals, UserSummary};
