//! Typed ID definitions for domain entities.

pub use super::id::Id;

/// Marker type for registered accounts.
pub struct User;

/// Marker type for stored summaries.
pub struct UserSummary;

pub type UserId = Id<User>;

pub type SummaryId = Id<UserSummary>;
