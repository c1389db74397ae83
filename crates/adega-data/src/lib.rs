//! Product API client for the Adega storefront.
//!
//! The storefront only ever asks one question of its backend: "give me page
//! `n` of recommended products". [`ProductApi`] is that contract;
//! [`HttpProductApi`] answers it over HTTP with `reqwest` and
//! [`InMemoryProductApi`] answers it from a fixed list.
//!
//! # Example
//!
//! ```rust,ignore
//! use adega_data::{ApiConfig, HttpProductApi, ProductApi};
//!
//! let api = HttpProductApi::new(ApiConfig::new("https://api.example.com"))?;
//! let page = api.fetch_products(1).await?;
//! println!("{} of {} pages", page.items.len(), page.total_pages);
//! ```

mod client;
mod config;
mod error;
mod memory;

use std::sync::Arc;

use adega_commerce::{Page, Product};
use async_trait::async_trait;

pub use client::HttpProductApi;
pub use config::ApiConfig;
pub use error::FetchError;
pub use memory::InMemoryProductApi;

/// Source of paged product data.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single UI thread.
#[async_trait(?Send)]
pub trait ProductApi {
    /// Fetch one page of products. Pages are 1-based.
    async fn fetch_products(&self, page: u32) -> Result<Page<Product>, FetchError>;
}

/// Shared handle to a product source.
pub type ProductApiHandle = Arc<dyn ProductApi + Send + Sync>;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ApiConfig, FetchError, HttpProductApi, InMemoryProductApi, ProductApi, ProductApiHandle,
    };
}
