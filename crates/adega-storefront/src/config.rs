//! Storefront configuration.
//!
//! The app ships with `storefront.toml` compiled in. The API base URL can be
//! overridden at build time with the `ADEGA_API_URL` environment variable.

use adega_commerce::Locale;
use adega_data::ApiConfig;
use adega_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration bundled into the build.
const BUNDLED_CONFIG: &str = include_str!("../storefront.toml");

/// Build-time override for [`ApiConfig::base_url`].
const API_URL_OVERRIDE: Option<&str> = option_env!("ADEGA_API_URL");

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML could not be parsed.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Storefront settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Application name, used as the log `app` field.
    pub name: String,
    /// Document title.
    pub title: String,
    /// Stylesheet path.
    pub css_path: Option<String>,
    /// Locale for prices.
    pub locale: Locale,
    /// Minimum level written to the console.
    pub log_level: LogLevel,
    /// Console log format.
    pub log_format: LogFormat,
    /// Product API settings.
    pub api: ApiConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "adega".to_string(),
            title: "Adega - Clube de Vinhos".to_string(),
            css_path: None,
            locale: Locale::PtBr,
            log_level: LogLevel::Info,
            log_format: LogFormat::Human,
            api: ApiConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Create a new configuration with the given app name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// The compiled-in configuration with build-time overrides applied.
    pub fn bundled() -> Result<Self, ConfigError> {
        let config = Self::from_toml_str(BUNDLED_CONFIG)?;
        Ok(match API_URL_OVERRIDE {
            Some(url) if !url.is_empty() => {
                let api = ApiConfig {
                    base_url: url.to_string(),
                    ..config.api.clone()
                };
                config.with_api(api)
            }
            _ => config,
        })
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the stylesheet path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }

    /// Set the price locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Replace the API settings.
    pub fn with_api(mut self, api: ApiConfig) -> Self {
        self.api = api;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("name must not be empty".into()));
        }
        if self.api.per_page == 0 {
            return Err(ConfigError::Invalid("api.per_page must be at least 1".into()));
        }
        Ok(())
    }
}
