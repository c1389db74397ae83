//! Loading indicator.

use leptos::prelude::*;

/// Spinner shown while products load.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-live="polite">
            <span class="spinner-cub" aria-hidden="true"></span>
            <span class="visually-hidden">"Carregando..."</span>
        </div>
    }
}
