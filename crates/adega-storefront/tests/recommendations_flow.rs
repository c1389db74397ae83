//! Drives the carousel fetch loop against an in-memory catalog.

use std::sync::Arc;

use adega_commerce::{Currency, Money, Product};
use adega_data::{FetchError, InMemoryProductApi, ProductApiHandle};
use adega_observability::{LogLevel, MemorySink, StructuredLogger};
use adega_storefront::recommendations::{
    dispatch_fetch, fetch_current_page, FetchOutcome, RecommendationsState, RenderPhase,
};
use futures::executor::block_on;
use leptos::prelude::*;

fn catalog(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|id| {
            let mut p = Product::new(id, format!("Vinho {}", id), Money::new(5990, Currency::BRL));
            p.price_member = Money::new(2990, Currency::BRL);
            p.price_non_member = Money::new(3790, Currency::BRL);
            p.discount = 50.0;
            p
        })
        .collect()
}

fn logger(sink: &MemorySink) -> StructuredLogger {
    StructuredLogger::new("adega")
        .with_min_level(LogLevel::Debug)
        .with_sink(Arc::new(sink.clone()))
        .for_component("recommendations")
}

fn ids(state: RwSignal<RecommendationsState>) -> Vec<String> {
    state.with_untracked(|s| s.items().iter().map(|p| p.id.to_string()).collect())
}

/// Request the current page the way the carousel does and run it to completion.
fn fetch(
    state: RwSignal<RecommendationsState>,
    api: &ProductApiHandle,
    logger: &StructuredLogger,
) -> Option<FetchOutcome> {
    block_on(fetch_current_page(state, api.clone(), logger.clone())?)
}

// === Paging ===

#[test]
fn test_first_page_then_next() {
    let owner = Owner::new();
    owner.with(|| {
        let memory = Arc::new(InMemoryProductApi::new(catalog(5), 2));
        let api: ProductApiHandle = memory.clone();
        let sink = MemorySink::new();
        let logger = logger(&sink);
        let state = RwSignal::new(RecommendationsState::new());

        assert_eq!(state.with_untracked(|s| s.phase()), RenderPhase::FullPageLoading);

        assert_eq!(fetch(state, &api, &logger), Some(FetchOutcome::Applied));
        assert_eq!(ids(state), vec!["1", "2"]);
        state.with_untracked(|s| {
            assert_eq!(s.total_pages(), Some(3));
            assert!(s.previous_disabled());
            assert!(!s.next_disabled());
            assert_eq!(s.phase(), RenderPhase::Cards);
        });

        state.update(|s| {
            s.next();
        });
        assert_eq!(fetch(state, &api, &logger), Some(FetchOutcome::Applied));

        assert_eq!(ids(state), vec!["3", "4"]);
        assert_eq!(state.with_untracked(|s| s.total_pages()), Some(3));
        assert!(!state.with_untracked(|s| s.previous_disabled()));
        assert_eq!(memory.requests(), vec![1, 2]);
    });
}

#[test]
fn test_walk_to_last_page_and_back() {
    let owner = Owner::new();
    owner.with(|| {
        let memory = Arc::new(InMemoryProductApi::new(catalog(5), 2));
        let api: ProductApiHandle = memory.clone();
        let logger = logger(&MemorySink::new());
        let state = RwSignal::new(RecommendationsState::new());

        fetch(state, &api, &logger);
        for _ in 0..2 {
            state.update(|s| {
                s.next();
            });
            fetch(state, &api, &logger);
        }

        assert_eq!(ids(state), vec!["5"]);
        assert!(state.with_untracked(|s| s.next_disabled()));

        // Clicking next on the last page does not move the cursor.
        assert!(!state.try_update(|s| s.next()).unwrap_or(true));
        assert_eq!(state.with_untracked(|s| s.page()), 3);

        state.update(|s| {
            s.previous();
        });
        fetch(state, &api, &logger);
        assert_eq!(ids(state), vec!["3", "4"]);
        assert_eq!(memory.requests(), vec![1, 2, 3, 2]);
    });
}

#[test]
fn test_same_page_twice_gives_same_ids() {
    let owner = Owner::new();
    owner.with(|| {
        let api: ProductApiHandle = Arc::new(InMemoryProductApi::new(catalog(5), 2));
        let logger = logger(&MemorySink::new());
        let state = RwSignal::new(RecommendationsState::new());

        fetch(state, &api, &logger);
        let first = ids(state);
        fetch(state, &api, &logger);

        assert_eq!(ids(state), first);
    });
}

// === Stale and failed fetches ===

#[test]
fn test_stale_completion_is_dropped() {
    let owner = Owner::new();
    owner.with(|| {
        let api: ProductApiHandle = Arc::new(InMemoryProductApi::new(catalog(6), 2));
        let sink = MemorySink::new();
        let logger = logger(&sink);
        let state = RwSignal::new(RecommendationsState::new());
        fetch(state, &api, &logger);

        state.update(|s| {
            s.next();
        });
        let stale = state.try_update(RecommendationsState::begin_fetch).unwrap();
        state.update(|s| {
            s.next();
        });
        let current = state.try_update(RecommendationsState::begin_fetch).unwrap();

        let outcome = block_on(dispatch_fetch(current, state, api.clone(), logger.clone()));
        assert_eq!(outcome, Some(FetchOutcome::Applied));
        assert_eq!(ids(state), vec!["5", "6"]);

        let outcome = block_on(dispatch_fetch(stale, state, api.clone(), logger.clone()));
        assert_eq!(outcome, Some(FetchOutcome::Stale));
        assert_eq!(ids(state), vec!["5", "6"]);

        let entries = sink.entries();
        let last = entries.last().unwrap();
        assert_eq!(last.level, LogLevel::Debug);
        assert_eq!(last.message, "discarded stale recommendations page");
    });
}

#[test]
fn test_failed_page_keeps_cards_and_logs_warning() {
    let owner = Owner::new();
    owner.with(|| {
        let api: ProductApiHandle =
            Arc::new(InMemoryProductApi::new(catalog(5), 2).failing_on(2));
        let sink = MemorySink::new();
        let logger = logger(&sink);
        let state = RwSignal::new(RecommendationsState::new());
        fetch(state, &api, &logger);

        state.update(|s| {
            s.next();
        });
        let outcome = fetch(state, &api, &logger);

        assert!(matches!(
            outcome,
            Some(FetchOutcome::Failed(FetchError::RequestError(_)))
        ));
        assert_eq!(ids(state), vec!["1", "2"]);
        state.with_untracked(|s| {
            assert!(!s.is_loading());
            assert_eq!(s.phase(), RenderPhase::Cards);
        });

        let warnings: Vec<_> = sink
            .entries()
            .into_iter()
            .filter(|e| e.level == LogLevel::Warn)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].component.as_deref(), Some("recommendations"));
        assert_eq!(warnings[0].fields.get("page"), Some(&serde_json::json!(2)));
    });
}

#[test]
fn test_first_page_failure_is_unavailable_then_retry() {
    let owner = Owner::new();
    owner.with(|| {
        let failing: ProductApiHandle =
            Arc::new(InMemoryProductApi::new(catalog(3), 2).failing_on(1));
        let healthy: ProductApiHandle = Arc::new(InMemoryProductApi::new(catalog(3), 2));
        let logger = logger(&MemorySink::new());
        let state = RwSignal::new(RecommendationsState::new());

        fetch(state, &failing, &logger);
        assert_eq!(state.with_untracked(|s| s.phase()), RenderPhase::Unavailable);
        assert!(state.with_untracked(|s| s.next_disabled()));

        fetch(state, &healthy, &logger);
        assert_eq!(state.with_untracked(|s| s.phase()), RenderPhase::Cards);
        assert_eq!(ids(state), vec!["1", "2"]);
    });
}
