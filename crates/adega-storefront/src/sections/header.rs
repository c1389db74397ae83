//! Site header.

use leptos::prelude::*;

use crate::favorites::FavoritesStore;

/// Logo, navigation and the favorites counter.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let favorites = expect_context::<FavoritesStore>();
    let count = move || favorites.count();

    view! {
        <header class="site-header">
            <a href="/" class="logo">"adega"</a>
            <nav class="site-nav">
                <a href="/#clube">"Clube"</a>
                <a href="/#loja">"Loja"</a>
                <a href="/#produtores">"Produtores"</a>
                <a href="/#ofertas">"Ofertas"</a>
                <a href="/#eventos">"Eventos"</a>
            </nav>
            <a href="/#favoritos" class="favorites-link" aria-label="Favoritos">
                "♥ "
                <span class="favorites-count">{count}</span>
            </a>
        </header>
    }
}
