//! # Adega Storefront
//!
//! Client-side Leptos app for the Adega wine club: header, banner, plans,
//! the paged "Recomendados" carousel with favorites, and the VLibras
//! accessibility widget.
//!
//! Build for the browser with the `csr` feature (e.g. `trunk serve --features csr`).
//! Without it the crate builds natively, which is how the tests run.

pub mod app;
pub mod config;
pub mod favorites;
pub mod home;
pub mod loader;
pub mod logging;
pub mod recommendations;
pub mod sections;

pub use app::{App, Storefront};
pub use config::{ConfigError, StorefrontConfig};
pub use favorites::{Favorites, FavoritesStore, Toggle};

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
