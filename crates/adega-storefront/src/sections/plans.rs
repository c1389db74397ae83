//! Subscription plans.

use adega_commerce::{Currency, Locale, Money};
use leptos::prelude::*;

use crate::config::StorefrontConfig;

/// A wine club subscription tier.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub bottles_per_month: u32,
    pub monthly_price: Money,
}

impl Plan {
    /// "R$ 89,90/mês" style label.
    pub fn price_label(&self, locale: Locale) -> String {
        format!("{}/mês", self.monthly_price.format(locale))
    }

    pub fn bottles_label(&self) -> String {
        match self.bottles_per_month {
            1 => "1 garrafa por mês".to_string(),
            n => format!("{} garrafas por mês", n),
        }
    }
}

/// Plans shown on the home page.
pub fn club_plans() -> Vec<Plan> {
    vec![
        Plan {
            name: "Essencial",
            bottles_per_month: 2,
            monthly_price: Money::new(8990, Currency::BRL),
        },
        Plan {
            name: "Tradição",
            bottles_per_month: 4,
            monthly_price: Money::new(16990, Currency::BRL),
        },
        Plan {
            name: "Reserva",
            bottles_per_month: 6,
            monthly_price: Money::new(129990, Currency::BRL),
        },
    ]
}

#[component]
pub fn Plans() -> impl IntoView {
    let locale = expect_context::<StorefrontConfig>().locale;

    view! {
        <section class="plans" id="clube">
            <h2>"Escolha seu plano"</h2>
            <ul class="plan-list">
                {club_plans()
                    .into_iter()
                    .map(|plan| view! {
                        <li class="plan">
                            <h3>{plan.name}</h3>
                            <p>{plan.bottles_label()}</p>
                            <p class="plan-price">{plan.price_label(locale)}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label_pt_br() {
        let plans = club_plans();
        assert_eq!(plans[0].price_label(Locale::PtBr), "R$\u{a0}89,90/mês");
        assert_eq!(plans[2].price_label(Locale::PtBr), "R$\u{a0}1.299,90/mês");
    }

    #[test]
    fn test_bottles_label() {
        let mut plan = club_plans().remove(0);
        assert_eq!(plan.bottles_label(), "2 garrafas por mês");

        plan.bottles_per_month = 1;
        assert_eq!(plan.bottles_label(), "1 garrafa por mês");
    }

    #[test]
    fn test_plans_priced_in_brl() {
        assert!(club_plans()
            .iter()
            .all(|p| p.monthly_price.currency == Currency::BRL));
    }
}
