//! Application root.

use std::sync::Arc;

use adega_data::{HttpProductApi, InMemoryProductApi, ProductApiHandle};
use adega_observability::StructuredLogger;
use leptos::leptos_dom::logging::console_error;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::StorefrontConfig;
use crate::favorites::FavoritesStore;
use crate::home::{HomePage, NotFound};
use crate::logging::logger_from_config;

/// Build the product source for `config`.
///
/// An unusable API configuration is logged and replaced by an empty catalog,
/// so the page still renders.
pub fn product_api(config: &StorefrontConfig, logger: &StructuredLogger) -> ProductApiHandle {
    match HttpProductApi::new(config.api.clone()) {
        Ok(api) => Arc::new(api.with_logger(logger)),
        Err(err) => {
            logger
                .error_builder("invalid product API configuration")
                .field("base_url", config.api.base_url.clone())
                .field("error", err.to_string())
                .emit();
            Arc::new(InMemoryProductApi::new(
                Vec::new(),
                config.api.per_page as usize,
            ))
        }
    }
}

/// Entry component: loads the bundled configuration and mounts the store.
#[component]
pub fn App() -> impl IntoView {
    let config = StorefrontConfig::bundled().unwrap_or_else(|err| {
        console_error(&format!("{err}; using default configuration"));
        StorefrontConfig::default()
    });
    let logger = logger_from_config(&config);
    let api = product_api(&config, &logger);

    logger
        .info_builder("storefront starting")
        .field("locale", config.locale.tag())
        .field("api", config.api.base_url.clone())
        .emit();

    view! { <Storefront config=config api=api logger=logger/> }
}

/// Provides the shared contexts and renders the router.
#[component]
pub fn Storefront(
    config: StorefrontConfig,
    api: ProductApiHandle,
    logger: StructuredLogger,
) -> impl IntoView {
    provide_meta_context();
    provide_context(api);
    provide_context(logger);
    FavoritesStore::provide();

    let title = config.title.clone();
    let stylesheet = config
        .css_path
        .clone()
        .map(|href| view! { <Stylesheet id="adega" href=href/> });
    provide_context(config);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        {stylesheet}
        <Meta name="description" content="Clube de vinhos com curadoria mensal"/>
        <Title text=title/>

        <Router>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
