use serde::Serialize;
use utoipa::ToSchema;

/// Default page when the parameter is missing or invalid.
pub const DEFAULT_PAGE: u64 = 1;
/// Default page size when the parameter is missing or invalid.
pub const DEFAULT_LIMIT: u64 = 5;
/// Hard ceiling on the page size to bound result-set and memory size.
pub const MAX_LIMIT: u64 = 200;

/// Resolved pagination window for one listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number, always ≥ 1.
    pub page: u64,
    /// Rows per page, always in `1..=MAX_LIMIT`.
    pub limit: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageWindow {
    /// Lenient parse from raw query values.
    ///
    /// Unparsable values fall back to the defaults; `page` is clamped to at
    /// least 1 and `limit` to `1..=MAX_LIMIT`, so the computed offset can
    /// never go negative and a single page can never exceed the ceiling.
    #[must_use]
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map_or(DEFAULT_PAGE, |p| p.max(1));
        let limit = limit
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|l| *l >= 1)
            .map_or(DEFAULT_LIMIT, |l| l.min(MAX_LIMIT));
        Self { page, limit }
    }

    /// Offset of the first row on this page.
    #[must_use]
    pub fn offset(self) -> u64 {
        (self.page - 1) * self.limit
    }
}

/// Pagination metadata returned alongside a page of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page this response covers.
    pub current_page: u64,
    /// Requested page size.
    pub items_per_page: u64,
    /// Total rows matching the filters, from the count statement.
    pub total_items: u64,
    /// Ceiling of `total_items / items_per_page`; 0 when nothing matches.
    pub total_pages: u64,
    /// Whether a later page exists.
    pub has_next_page: bool,
    /// Whether an earlier page exists.
    pub has_previous_page: bool,
}

impl Pagination {
    /// Pure assembly from page, page size, and total. No I/O.
    ///
    /// `limit` is guaranteed ≥ 1 by [`PageWindow`], so the ceiling division
    /// is always defined.
    #[must_use]
    pub fn assemble(page: u64, limit: u64, total: u64) -> Self {
        let total_pages = total.div_ceil(limit);
        Self {
            current_page: page,
            items_per_page: limit,
            total_items: total,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }
}
