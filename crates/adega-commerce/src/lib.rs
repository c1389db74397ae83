//! Catalog domain types for the Adega storefront.
//!
//! - **Money**: integer minor units with locale-aware currency formatting
//! - **Catalog**: products as served by the recommendations API
//! - **Page**: one page of results plus the total page count
//!
//! # Example
//!
//! ```
//! use adega_commerce::prelude::*;
//!
//! let price = Money::new(2990, Currency::BRL);
//! assert_eq!(price.format(Locale::PtBr), "R$\u{a0}29,90");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod page;

pub use catalog::Product;
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Locale, Money};
pub use page::{Page, PageCursor};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::Product;
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Locale, Money};
    pub use crate::page::{Page, PageCursor};
}
