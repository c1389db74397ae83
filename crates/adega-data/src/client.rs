//! HTTP implementation of [`ProductApi`].

use adega_commerce::{Page, Product};
use adega_observability::StructuredLogger;
use async_trait::async_trait;
use reqwest::Url;

use crate::{ApiConfig, FetchError, ProductApi};

/// Longest response body snippet kept in an error.
const MAX_ERROR_BODY: usize = 2000;

/// Fetches product pages from the storefront backend.
///
/// `GET {base_url}/products?page={page}&limit={per_page}`, expecting
/// `{ "items": [...], "totalPages": n }`.
///
/// Failures are logged at error level under the `product-api` component.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    config: ApiConfig,
    client: reqwest::Client,
    logger: StructuredLogger,
}

impl HttpProductApi {
    /// Create a client. Fails if the base URL is not an absolute http(s) URL.
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(config.base_url.clone()));
        }

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout());
        let client = builder
            .build()
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        Ok(Self {
            config,
            client,
            logger: StructuredLogger::new("adega").for_component("product-api"),
        })
    }

    /// Log through `logger`, scoped to the `product-api` component.
    pub fn with_logger(mut self, logger: &StructuredLogger) -> Self {
        self.logger = logger.for_component("product-api");
        self
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    async fn fetch_products(&self, page: u32) -> Result<Page<Product>, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidPage(page));
        }

        let url = self.config.products_url();
        self.logger
            .debug_builder("fetching products")
            .field("url", url.as_str())
            .field_i64("page", i64::from(page))
            .emit();

        let result = self.request(&url, page).await;
        if let Err(err) = &result {
            self.logger
                .error_builder("products request failed")
                .field("url", url.as_str())
                .field_i64("page", i64::from(page))
                .field("error", err.to_string())
                .emit();
        }
        result
    }
}

impl HttpProductApi {
    async fn request(&self, url: &str, page: u32) -> Result<Page<Product>, FetchError> {
        let resp = self
            .client
            .get(url)
            .query(&[("page", page), ("limit", self.config.per_page)])
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(FetchError::HttpError {
                status: status.as_u16(),
                message: truncate_body(&body),
            });
        }

        serde_json::from_str::<Page<Product>>(&body)
            .map_err(|e| FetchError::ParseError(e.to_string()))
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
