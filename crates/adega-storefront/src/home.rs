//! Home page.

use leptos::prelude::*;

use crate::recommendations::Recommendations;
use crate::sections::{AccessibilityOverlay, Banner, Plans, SiteHeader, Wineshare};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SiteHeader/>
        <Banner/>
        <Plans/>
        <Recommendations/>
        <Wineshare/>
        <AccessibilityOverlay/>
    }
}

/// Catch-all for unknown paths.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Página não encontrada"</p>
            <a href="/">"Voltar ao início"</a>
        </div>
    }
}
