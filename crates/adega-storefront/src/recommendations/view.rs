//! Carousel component and its fetch loop.

use std::future::Future;

use adega_commerce::{Locale, Page};
use adega_data::ProductApiHandle;
use adega_observability::StructuredLogger;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::card::RecommendationCard;
use super::state::{FetchOutcome, FetchTicket, RecommendationsState, RenderPhase};
use crate::config::StorefrontConfig;
use crate::loader::Loader;

/// Run one dispatched fetch to completion and apply it to `state`.
///
/// Failures are logged as warnings and otherwise swallowed. Returns `None`
/// if the state signal was disposed while the request was in flight.
pub async fn dispatch_fetch(
    ticket: FetchTicket,
    state: RwSignal<RecommendationsState>,
    api: ProductApiHandle,
    logger: StructuredLogger,
) -> Option<FetchOutcome> {
    let result = api.fetch_products(ticket.page()).await;
    let count = result.as_ref().map(Page::len).unwrap_or(0);
    let outcome = state.try_update(|s| s.finish(ticket, result))?;

    match &outcome {
        FetchOutcome::Applied => logger
            .debug_builder("loaded recommendations")
            .field_i64("page", i64::from(ticket.page()))
            .field_i64("items", count as i64)
            .emit(),
        FetchOutcome::Stale => logger
            .debug_builder("discarded stale recommendations page")
            .field_i64("page", i64::from(ticket.page()))
            .emit(),
        FetchOutcome::Failed(err) => logger
            .warn_builder("failed to load recommendations")
            .field_i64("page", i64::from(ticket.page()))
            .field("error", err.to_string())
            .field_bool("decode", err.is_decode())
            .emit(),
    }

    Some(outcome)
}

/// Put `state` into loading for its current page and return the request
/// that completes it.
///
/// The component calls this once per cursor value and once per retry.
/// `None` if `state` has been disposed.
pub fn fetch_current_page(
    state: RwSignal<RecommendationsState>,
    api: ProductApiHandle,
    logger: StructuredLogger,
) -> Option<impl Future<Output = Option<FetchOutcome>>> {
    let ticket = state.try_update(RecommendationsState::begin_fetch)?;
    Some(dispatch_fetch(ticket, state, api, logger))
}

/// Paged "Recomendados" carousel.
///
/// Needs `ProductApiHandle`, `FavoritesStore`, `StorefrontConfig` and
/// `StructuredLogger` in context.
#[component]
pub fn Recommendations() -> impl IntoView {
    let api = expect_context::<ProductApiHandle>();
    let locale = expect_context::<StorefrontConfig>().locale;
    let logger = expect_context::<StructuredLogger>().for_component("recommendations");

    let state = RwSignal::new(RecommendationsState::new());
    let page = Memo::new(move |_| state.with(RecommendationsState::page));
    let retry = RwSignal::new(0u32);

    Effect::new(move |_| {
        page.track();
        retry.track();
        if let Some(request) = fetch_current_page(state, api.clone(), logger.clone()) {
            spawn_local(async move {
                request.await;
            });
        }
    });

    view! { <RecommendationsCarousel state=state retry=retry locale=locale/> }
}

/// Markup for a carousel state. Bumping `retry` asks for the current page
/// again.
#[component]
pub fn RecommendationsCarousel(
    state: RwSignal<RecommendationsState>,
    retry: RwSignal<u32>,
    locale: Locale,
) -> impl IntoView {
    let phase = Memo::new(move |_| state.with(RecommendationsState::phase));
    let page_failed = move || state.with(|s| !s.is_loading() && s.last_error().is_some());

    let previous_disabled = move || state.with(RecommendationsState::previous_disabled);
    let next_disabled = move || state.with(RecommendationsState::next_disabled);

    let cards = move || {
        if phase.get() == RenderPhase::CardsLoading {
            return view! { <Loader/> }.into_any();
        }
        state
            .with(|s| s.items().to_vec())
            .into_iter()
            .map(|product| view! { <RecommendationCard product=product locale=locale/> })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="recommendations">
            {move || match phase.get() {
                RenderPhase::FullPageLoading => view! { <Loader/> }.into_any(),
                RenderPhase::Unavailable => view! {
                    <div class="recommendations-unavailable" role="alert">
                        <p>"Não foi possível carregar as recomendações."</p>
                        <button type="button" on:click=move |_| retry.update(|n| *n += 1)>
                            "Tentar novamente"
                        </button>
                    </div>
                }
                .into_any(),
                RenderPhase::Empty => view! {
                    <p class="recommendations-empty">"Nenhum produto encontrado."</p>
                }
                .into_any(),
                RenderPhase::CardsLoading | RenderPhase::Cards => view! {
                    <h2 class="recommendations-title">"Recomendados"</h2>
                    {move || page_failed().then(|| view! {
                        <div class="recommendations-page-error" role="alert">
                            <p>"Não foi possível carregar esta página."</p>
                            <button type="button" on:click=move |_| retry.update(|n| *n += 1)>
                                "Tentar novamente"
                            </button>
                        </div>
                    })}
                    <div class="recommendation-container">
                        <button
                            type="button"
                            class="page-button"
                            aria-label="Página anterior"
                            disabled=previous_disabled
                            on:click=move |_| state.update(|s| {
                                s.previous();
                            })
                        >
                            "«"
                        </button>

                        <div class="recommendation-cards">{cards}</div>

                        <button
                            type="button"
                            class="page-button"
                            aria-label="Próxima página"
                            disabled=next_disabled
                            on:click=move |_| state.update(|s| {
                                s.next();
                            })
                        >
                            "»"
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::FavoritesStore;
    use adega_commerce::{Currency, Money, Product};
    use adega_data::FetchError;
    use leptos::tachys::view::RenderHtml;

    fn product(id: u64) -> Product {
        Product::new(id, format!("Vinho {}", id), Money::new(4990, Currency::BRL))
    }

    fn loaded(ids: &[u64], total_pages: u32) -> RecommendationsState {
        let mut state = RecommendationsState::new();
        let ticket = state.begin_fetch();
        state.finish(
            ticket,
            Ok(Page::new(ids.iter().copied().map(product).collect(), total_pages)),
        );
        state
    }

    fn render(state: RecommendationsState) -> String {
        let owner = Owner::new();
        owner.with(|| {
            FavoritesStore::provide();
            let state = RwSignal::new(state);
            let retry = RwSignal::new(0u32);
            view! { <RecommendationsCarousel state=state retry=retry locale=Locale::PtBr/> }
                .to_html()
        })
    }

    /// Opening tag of the button with the given aria-label.
    fn button_tag<'a>(html: &'a str, label: &str) -> &'a str {
        let at = html
            .find(&format!("aria-label=\"{}\"", label))
            .unwrap_or_else(|| panic!("no button labelled {label}"));
        let start = html[..at].rfind("<button").unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..end]
    }

    fn card_count(html: &str) -> usize {
        html.matches("class=\"recommendation-card\"").count()
    }

    // === Phases ===

    #[test]
    fn test_renders_loader_before_first_page() {
        let html = render(RecommendationsState::new());

        assert!(html.contains("Carregando..."));
        assert_eq!(card_count(&html), 0);
        assert!(!html.contains("Recomendados"));
    }

    #[test]
    fn test_renders_unavailable_notice() {
        let mut state = RecommendationsState::new();
        let ticket = state.begin_fetch();
        state.finish(ticket, Err(FetchError::Timeout));

        let html = render(state);
        assert!(html.contains("Não foi possível carregar as recomendações."));
        assert!(html.contains("Tentar novamente"));
    }

    #[test]
    fn test_renders_empty_notice() {
        let html = render(loaded(&[], 0));
        assert!(html.contains("Nenhum produto encontrado."));
    }

    // === Controls ===

    #[test]
    fn test_first_page_disables_previous_only() {
        let html = render(loaded(&[1, 2], 3));

        assert_eq!(card_count(&html), 2);
        assert!(button_tag(&html, "Página anterior").contains("disabled"));
        assert!(!button_tag(&html, "Próxima página").contains("disabled"));
    }

    #[test]
    fn test_last_page_disables_next_only() {
        let mut state = loaded(&[1, 2], 2);
        state.next();
        let ticket = state.begin_fetch();
        state.finish(ticket, Ok(Page::new(vec![product(3)], 2)));

        let html = render(state);
        assert_eq!(card_count(&html), 1);
        assert!(!button_tag(&html, "Página anterior").contains("disabled"));
        assert!(button_tag(&html, "Próxima página").contains("disabled"));
    }

    #[test]
    fn test_page_change_shows_loader_over_cards() {
        let mut state = loaded(&[1, 2], 3);
        state.next();
        state.begin_fetch();

        let html = render(state);
        assert!(html.contains("Recomendados"));
        assert!(html.contains("Carregando..."));
        assert_eq!(card_count(&html), 0);
    }

    #[test]
    fn test_failed_page_keeps_cards_and_offers_retry() {
        let mut state = loaded(&[1, 2], 3);
        state.next();
        let ticket = state.begin_fetch();
        state.finish(ticket, Err(FetchError::Timeout));

        let html = render(state);
        assert_eq!(card_count(&html), 2);
        assert!(html.contains("Não foi possível carregar esta página."));
        assert!(html.contains("Tentar novamente"));
    }

    #[test]
    fn test_loaded_page_has_no_retry() {
        let html = render(loaded(&[1, 2], 3));
        assert!(!html.contains("Tentar novamente"));
    }
}
