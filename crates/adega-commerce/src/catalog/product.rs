//! Product type as served by the recommendations API.

use crate::ids::ProductId;
use crate::money::{self, Locale, Money};
use serde::{Deserialize, Deserializer, Serialize};

/// A product in a recommendations page.
///
/// Field names on the wire are camelCase; `review_count` is sent as
/// `avaliations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Average rating, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of reviews, if any.
    #[serde(
        default,
        rename = "avaliations",
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub review_count: Option<u32>,
    /// Price for club members.
    #[serde(with = "money::decimal")]
    pub price_member: Money,
    /// Price for non-members.
    #[serde(with = "money::decimal")]
    pub price_non_member: Money,
    /// List price, shown struck through next to the discount.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Discount percentage. `null` reads as no discount.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub discount: f64,
}

impl Product {
    /// Create a product with every price set to `price` and no feedback.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            rating: None,
            review_count: None,
            price_member: price,
            price_non_member: price,
            price,
            discount: 0.0,
        }
    }

    /// Rating to show in the card badge. Missing and zero ratings are hidden.
    pub fn rating_badge(&self) -> Option<String> {
        self.rating
            .filter(|r| *r != 0.0 && r.is_finite())
            .map(format_number)
    }

    /// Review count to show in the card badge. Missing and zero counts are
    /// hidden.
    pub fn review_badge(&self) -> Option<String> {
        self.review_count.filter(|n| *n != 0).map(|n| n.to_string())
    }

    /// Discount label, e.g. `"15% OFF"`.
    pub fn discount_label(&self) -> String {
        format!("{}% OFF", self.discount.round() as i64)
    }

    /// Member price formatted for `locale`.
    pub fn member_price_display(&self, locale: Locale) -> String {
        self.price_member.format(locale)
    }

    /// Non-member price formatted for `locale`.
    pub fn non_member_price_display(&self, locale: Locale) -> String {
        self.price_non_member.format(locale)
    }

    /// List price formatted for `locale`.
    pub fn list_price_display(&self, locale: Locale) -> String {
        self.price.format(locale)
    }
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// Review counts sometimes arrive as floats (`12.0`). Negative and
/// non-finite counts are treated as missing.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n.round().min(u32::MAX as f64) as u32))
}

/// Shortest decimal form, so `4.0` renders as `4` and `4.5` as `4.5`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
