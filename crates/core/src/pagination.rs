//! Pagination math and the pagination block returned with list responses.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Row offset for a 1-based `page` of size `limit`.
pub fn skip(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// Number of pages needed to hold `total` rows at `limit` rows per page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

// ---------------------------------------------------------------------------
// Response block
// ---------------------------------------------------------------------------

/// Pagination summary included alongside every rating listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_ratings: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    /// Build the block for a 1-based `page` over `total` matching rows.
    ///
    /// A page past the end is reported as-is: `current_page` may exceed
    /// `total_pages`, in which case `has_next_page` is false.
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let pages = total_pages(total, limit);
        Self {
            current_page: page,
            total_pages: pages,
            total_ratings: total,
            has_next_page: page < pages,
            has_prev_page: page > 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
