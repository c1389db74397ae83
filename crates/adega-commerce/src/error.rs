//! Commerce error types.

use thiserror::Error;

/// Errors raised while decoding catalog values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Unknown locale tag.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Amount cannot be represented in minor units.
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(f64),
}
