//! Product API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_per_page() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

/// Where and how to fetch product pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL; `/products` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Items requested per page (`limit` query parameter).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Request timeout. Only applied on native targets.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            per_page: default_per_page(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the page size.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the products endpoint.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url.trim_end_matches('/'))
    }
}
