//! Pagination types for list queries.
//!
//! Pages are 1-indexed. Page `p` of size `n` covers records `[(p-1)*n, p*n)`.

use std::ops::{Range, RangeInclusive};

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    /// Creates a request, clamping page and page size to at least 1.
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Calculates the offset of the first record on this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// Returns the limit for queries.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }

    /// Returns the half-open record window `[offset, offset + limit)`.
    #[must_use]
    pub fn window(&self) -> Range<u64> {
        self.offset()..self.offset() + self.limit()
    }

    /// Returns the part of `items` that falls on this page.
    ///
    /// Pages past the end yield an empty slice.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len();
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(len);
        let end = usize::try_from(self.window().end)
            .unwrap_or(usize::MAX)
            .min(len);
        &items[start..end]
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

/// Returns `ceil(total / per_page)`; zero records means zero pages.
#[must_use]
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX)
}

impl PageMeta {
    /// Builds metadata for `request` over `total` records.
    #[must_use]
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            per_page: request.per_page,
            total,
            total_pages: total_pages(total, request.per_page),
        }
    }

    /// Returns true if there is a page before this one.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Returns true if there is a page after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns the page numbers to show in a pager of at most `show` buttons.
    ///
    /// The window is centred on the current page and shifted to stay inside
    /// `1..=total_pages`. Returns `None` when there is at most one page.
    #[must_use]
    pub fn visible_pages(&self, show: u32) -> Option<RangeInclusive<u32>> {
        if self.total_pages <= 1 {
            return None;
        }
        let show = show.max(1);
        let current = self.page.min(self.total_pages);
        let mut start = current.saturating_sub(show / 2).max(1);
        let end = self.total_pages.min(start.saturating_add(show - 1));
        if end - start < show - 1 {
            start = end.saturating_sub(show - 1).max(1);
        }
        Some(start..=end)
    }
}

impl<T> PageResponse<T> {
    /// Creates a new paginated response.
    #[must_use]
    pub fn new(data: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            data,
            meta: PageMeta::new(request, total),
        }
    }

    /// Maps the page items, keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
