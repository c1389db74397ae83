//! Favorited products.
//!
//! [`Favorites`] is the plain collection; [`FavoritesStore`] is the reactive
//! handle the app creates once and shares through context.

use adega_commerce::{Product, ProductId};
use leptos::prelude::*;

/// Result of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Products the visitor has marked, in the order they were added.
///
/// Stores product snapshots so the list can be shown without refetching.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    products: Vec<Product>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `product` if absent, remove it if present. Keyed by id.
    pub fn toggle(&mut self, product: &Product) -> Toggle {
        match self.products.iter().position(|p| p.id == product.id) {
            Some(index) => {
                self.products.remove(index);
                Toggle::Removed
            }
            None => {
                self.products.push(product.clone());
                Toggle::Added
            }
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Reactive favorites shared by every component that needs them.
///
/// `toggle` is the only way to change the set.
#[derive(Debug, Clone, Copy)]
pub struct FavoritesStore {
    favorites: RwSignal<Favorites>,
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesStore {
    /// Create an empty store owned by the current reactive owner.
    pub fn new() -> Self {
        Self {
            favorites: RwSignal::new(Favorites::new()),
        }
    }

    /// Create an empty store and provide it as context.
    pub fn provide() -> Self {
        let store = Self::new();
        provide_context(store);
        store
    }

    /// Tracked membership test.
    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.with(|f| f.contains(id))
    }

    /// Tracked count.
    pub fn count(&self) -> usize {
        self.favorites.with(Favorites::len)
    }

    /// Add or remove `product`. `None` once the store has been disposed.
    pub fn toggle(&self, product: &Product) -> Option<Toggle> {
        self.favorites.try_update(|f| f.toggle(product))
    }
}
