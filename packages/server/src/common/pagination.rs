//! Offset pagination types.
//!
//! # Usage
//!
//! ```rust,ignore
//! let request = PageRequest::new(query.page, query.size, 10);
//! let rows = UserSummary::find_page_for_user(user_id, None, sort, &request, pool).await?;
//! let total = UserSummary::count_for_user(user_id, None, pool).await?;
//! let page = Page::new(rows, &request, total).map(UserSummaryDto::from);
//! ```

use serde::Serialize;

/// Largest page a client may ask for.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Zero-based page coordinates, already clamped to sane bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    /// Negative pages become 0; sizes are clamped to `1..=MAX_PAGE_SIZE`.
    pub fn new(page: Option<i64>, size: Option<i64>, default_size: i64) -> Self {
        Self {
            page: page.unwrap_or(0).max(0),
            size: size.unwrap_or(default_size).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// `asc` (any case) sorts ascending, everything else descending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// One page of results plus the totals a client needs to render pagers.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total: i64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total: total.max(0),
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.size <= 0 {
            return 0;
        }
        (self.total + self.size - 1) / self.size
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}
