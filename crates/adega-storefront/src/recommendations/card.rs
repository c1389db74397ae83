//! A single product card in the carousel.

use adega_commerce::{Locale, Product};
use leptos::prelude::*;

use crate::favorites::FavoritesStore;

/// Card with feedback badges, prices and the favorite toggle.
#[component]
pub fn RecommendationCard(product: Product, locale: Locale) -> impl IntoView {
    let favorites = expect_context::<FavoritesStore>();

    let id = product.id.clone();
    let is_favorite = Memo::new(move |_| favorites.is_favorite(&id));

    let rating = product.rating_badge();
    let reviews = product.review_badge();
    let image = product.image.clone();
    let name = product.name.clone();
    let member_price = product.member_price_display(locale);
    let non_member_price = product.non_member_price_display(locale);
    let list_price = product.list_price_display(locale);
    let discount = product.discount_label();

    let favorite_label = move || {
        if is_favorite.get() {
            "Remover dos favoritos"
        } else {
            "Adicionar aos favoritos"
        }
    };

    view! {
        <article class="recommendation-card">
            <div class="feedback-container">
                {rating.map(|rating| view! {
                    <span class="feedback-item">
                        <span class="feedback-label">{rating}</span>
                        <span class="icon" aria-hidden="true">"★"</span>
                    </span>
                })}
                {reviews.map(|reviews| view! {
                    <span class="feedback-item">
                        <span class="feedback-label">{reviews}</span>
                        <span class="icon" aria-hidden="true">"💬"</span>
                    </span>
                })}
            </div>

            <img class="product-image" src=image alt=name.clone()/>
            <p class="product-name">{name}</p>

            <div class="price-container">
                <span class="price-label">"sócio wine:"</span>
                <span class="price price-member">{member_price}</span>
            </div>
            <div class="price-container">
                <span class="price-label">"não sócio:"</span>
                <span class="price price-non-member">{non_member_price}</span>
            </div>
            <div class="discount-container">
                <span class="price-list">{list_price}</span>
                <span class="discount">{discount}</span>
            </div>

            <footer class="recommendation-footer">
                <button type="button" class="add-button">"Adicionar"</button>
                <button
                    type="button"
                    class="favorite-button"
                    aria-label=favorite_label
                    aria-pressed=move || is_favorite.get().to_string()
                    on:click=move |_| {
                        favorites.toggle(&product);
                    }
                >
                    {move || if is_favorite.get() { "♥" } else { "♡" }}
                </button>
            </footer>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adega_commerce::{Currency, Money};
    use leptos::tachys::view::RenderHtml;

    fn malbec() -> Product {
        let mut p = Product::new(7u64, "Malbec Reserva", Money::new(5990, Currency::BRL));
        p.price_member = Money::new(2990, Currency::BRL);
        p.price_non_member = Money::new(3450, Currency::BRL);
        p.discount = 50.0;
        p.rating = Some(4.5);
        p.review_count = Some(12);
        p
    }

    fn render(store: FavoritesStore, product: Product) -> String {
        provide_context(store);
        view! { <RecommendationCard product=product locale=Locale::PtBr/> }.to_html()
    }

    #[test]
    fn test_card_shows_prices_and_badges() {
        let owner = Owner::new();
        owner.with(|| {
            let html = render(FavoritesStore::new(), malbec());

            assert!(html.contains("Malbec Reserva"));
            assert!(html.contains("sócio wine:"));
            assert!(html.contains("R$\u{a0}29,90"));
            assert!(html.contains("não sócio:"));
            assert!(html.contains("R$\u{a0}34,50"));
            assert!(html.contains("R$\u{a0}59,90"));
            assert!(html.contains("50% OFF"));
            assert!(html.contains("4.5"));
            assert!(html.contains("★"));
            assert!(html.contains(">12<"));
        });
    }

    #[test]
    fn test_card_hides_missing_feedback() {
        let owner = Owner::new();
        owner.with(|| {
            let mut product = malbec();
            product.rating = Some(0.0);
            product.review_count = None;

            let html = render(FavoritesStore::new(), product);
            assert!(!html.contains("★"));
            assert!(!html.contains("feedback-item"));
        });
    }

    #[test]
    fn test_card_heart_follows_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store = FavoritesStore::new();

            let html = render(store, malbec());
            assert!(html.contains("♡"));
            assert!(html.contains("aria-pressed=\"false\""));
            assert!(html.contains("Adicionar aos favoritos"));

            store.toggle(&malbec());
            let html = render(store, malbec());
            assert!(html.contains("♥"));
            assert!(html.contains("aria-pressed=\"true\""));
            assert!(html.contains("Remover dos favoritos"));
        });
    }
}
