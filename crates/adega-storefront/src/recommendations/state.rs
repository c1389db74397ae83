//! Pagination and loading state behind the recommendations carousel.
//!
//! Kept free of reactive types so every transition can be driven directly.
//! The component wraps it in a signal and feeds it fetch results.

use adega_commerce::{Page, PageCursor, Product};
use adega_data::FetchError;

/// A dispatched fetch, tagged with the page it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    page: u32,
}

impl FetchTicket {
    /// Page this fetch asked for.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// What happened when a fetch result was handed back.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Items replaced.
    Applied,
    /// The cursor moved on before the result arrived; nothing changed.
    Stale,
    /// The fetch failed; items kept, loading cleared.
    Failed(FetchError),
}

/// What the carousel should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    /// Nothing loaded yet, first fetch in flight.
    FullPageLoading,
    /// Nothing loaded and the last fetch failed.
    Unavailable,
    /// A fetch succeeded with no products.
    Empty,
    /// Cards exist; a new page is loading.
    CardsLoading,
    /// Cards for the current page.
    Cards,
}

/// Carousel state: cursor, known page count, current items.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationsState {
    cursor: PageCursor,
    total_pages: Option<u32>,
    items: Vec<Product>,
    loading: bool,
    last_error: Option<String>,
}

impl Default for RecommendationsState {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationsState {
    /// Page 1, unknown total, no items, loading.
    pub fn new() -> Self {
        Self {
            cursor: PageCursor::first(),
            total_pages: None,
            items: Vec::new(),
            loading: true,
            last_error: None,
        }
    }

    /// Current page number.
    pub fn page(&self) -> u32 {
        self.cursor.page()
    }

    /// Total page count, once a fetch has succeeded.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Products of the current page.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Enter loading for the current page.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        FetchTicket {
            page: self.cursor.page(),
        }
    }

    /// Apply a fetch result.
    ///
    /// The total page count is only taken from the first successful response.
    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        result: Result<Page<Product>, FetchError>,
    ) -> FetchOutcome {
        if ticket.page != self.cursor.page() {
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                if self.total_pages.is_none() {
                    self.total_pages = Some(page.total_pages);
                }
                self.items = page.items;
                self.last_error = None;
                FetchOutcome::Applied
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Go back one page. No-op on page 1.
    pub fn previous(&mut self) -> bool {
        self.cursor.retreat()
    }

    /// Go forward one page. No-op until the total is known, and on the last
    /// page.
    pub fn next(&mut self) -> bool {
        self.cursor.advance(self.total_pages)
    }

    pub fn previous_disabled(&self) -> bool {
        self.cursor.is_first()
    }

    pub fn next_disabled(&self) -> bool {
        !self.cursor.has_next(self.total_pages)
    }

    pub fn phase(&self) -> RenderPhase {
        match (self.items.is_empty(), self.loading) {
            (true, true) => RenderPhase::FullPageLoading,
            (true, false) if self.last_error.is_some() => RenderPhase::Unavailable,
            (true, false) => RenderPhase::Empty,
            (false, true) => RenderPhase::CardsLoading,
            (false, false) => RenderPhase::Cards,
        }
    }
}
