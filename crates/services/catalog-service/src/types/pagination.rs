//! Pagination types for list endpoints.
//!
//! Raw query values arrive signed and optional; `PageRequest` is the only
//! shape the repositories accept, and it is always normalized.

use serde::{Deserialize, Serialize};

use domain::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, SORT_DESC};

/// Sort direction on the product name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a sort keyword. Anything other than `desc` (case-insensitive)
    /// falls back to ascending.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case(SORT_DESC) {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    pub fn is_desc(&self) -> bool {
        matches!(self, SortOrder::Desc)
    }
}

/// Pagination query parameters as sent by clients (`?page=&limit=&sort=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}

impl From<PaginationParams> for PageRequest {
    fn from(params: PaginationParams) -> Self {
        PageRequest::new(
            params.page.unwrap_or(0),
            params.limit.unwrap_or(0),
            params.sort.as_deref().map(SortOrder::parse).unwrap_or_default(),
        )
    }
}

/// Normalized page window (1-indexed page, bounded limit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
    sort: SortOrder,
}

impl PageRequest {
    /// Build a page window.
    ///
    /// Non-positive `page` becomes `DEFAULT_PAGE_NUMBER`, non-positive
    /// `limit` becomes `DEFAULT_PAGE_SIZE`, and `limit` is capped at
    /// `MAX_PAGE_SIZE`.
    pub fn new(page: i64, limit: i64, sort: SortOrder) -> Self {
        let page = if page <= 0 { DEFAULT_PAGE_NUMBER } else { page as u64 };
        let limit = if limit <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            (limit as u64).min(MAX_PAGE_SIZE)
        };

        Self { page, limit, sort }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Number of records to skip.
    ///
    /// Capped at `i64::MAX`, the largest offset SQL backends bind.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_SIZE,
            sort: SortOrder::Asc,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub sort: SortOrder,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, request: &PageRequest, total: u64) -> Self {
        let limit = request.limit();
        let total_pages = if limit > 0 { total.div_ceil(limit) } else { 0 };

        Self {
            data,
            meta: PaginationMeta {
                page: request.page(),
                limit,
                sort: request.sort(),
                total,
                total_pages,
            },
        }
    }

    /// Convert the items while keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
