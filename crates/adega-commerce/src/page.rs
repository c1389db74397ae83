//! Paged results and the pagination cursor.

use serde::{Deserialize, Serialize};

/// One page of results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The result items, in display order.
    pub items: Vec<T>,
    /// Total number of pages the backend reports.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Create a page.
    pub fn new(items: Vec<T>, total_pages: u32) -> Self {
        Self { items, total_pages }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Current 1-based page index.
///
/// Moves by one step at a time. The lower bound is always 1; the upper bound
/// is whatever total the caller passes in, which may still be unknown.
/// Only [`PageCursor::first`] creates one, so the page is never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageCursor(u32);

impl PageCursor {
    /// Cursor on the first page.
    pub fn first() -> Self {
        Self(1)
    }

    /// Current page number.
    pub fn page(&self) -> u32 {
        self.0
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.0 == 1
    }

    /// Whether a next page is known to exist.
    pub fn has_next(&self, total_pages: Option<u32>) -> bool {
        total_pages.is_some_and(|total| self.0 < total)
    }

    /// Step back one page. Returns false on the first page.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.0 -= 1;
        true
    }

    /// Step forward one page if `total_pages` says there is one.
    pub fn advance(&mut self, total_pages: Option<u32>) -> bool {
        if !self.has_next(total_pages) {
            return false;
        }
        self.0 += 1;
        true
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::first()
    }
}
