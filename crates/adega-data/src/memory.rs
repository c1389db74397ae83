//! In-memory [`ProductApi`] backed by a fixed product list.

use std::collections::HashSet;
use std::sync::Mutex;

use adega_commerce::{Page, Product};
use async_trait::async_trait;

use crate::{FetchError, ProductApi};

/// Serves pages out of a `Vec<Product>`.
///
/// Records every requested page and can be told to fail specific pages.
#[derive(Debug)]
pub struct InMemoryProductApi {
    products: Vec<Product>,
    per_page: usize,
    failing_pages: HashSet<u32>,
    requests: Mutex<Vec<u32>>,
}

impl InMemoryProductApi {
    /// Create a catalog split into pages of `per_page` items.
    pub fn new(products: Vec<Product>, per_page: usize) -> Self {
        Self {
            products,
            per_page: per_page.max(1),
            failing_pages: HashSet::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Make requests for `page` fail with a request error.
    pub fn failing_on(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> u32 {
        self.products.len().div_ceil(self.per_page) as u32
    }

    /// Pages requested so far, in order.
    pub fn requests(&self) -> Vec<u32> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Build a page without recording a request.
    pub fn page(&self, page: u32) -> Result<Page<Product>, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidPage(page));
        }
        if self.failing_pages.contains(&page) {
            return Err(FetchError::RequestError(format!("page {} unavailable", page)));
        }

        let start = (page as usize - 1).saturating_mul(self.per_page);
        let items = self
            .products
            .iter()
            .skip(start)
            .take(self.per_page)
            .cloned()
            .collect();

        Ok(Page::new(items, self.total_pages()))
    }
}

#[async_trait(?Send)]
impl ProductApi for InMemoryProductApi {
    async fn fetch_products(&self, page: u32) -> Result<Page<Product>, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(page);
        }
        self.page(page)
    }
}
