//! Money type for representing monetary values.
//!
//! Amounts are kept in integer minor units. The recommendations API sends
//! prices as decimal numbers, so [`decimal`] provides the serde adapter used
//! on product fields.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::CommerceError;

/// Currencies the catalog is priced in. The club only sells in reais.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
        }
    }

    /// Get the currency symbol. Both locales write reais as `R$`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Number formatting conventions.
///
/// Serialized as its BCP 47 tag. Decoding goes through [`Locale::from_tag`],
/// so `pt_br` and `PT-BR` are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Brazilian Portuguese: `R$ 1.234,50`.
    #[default]
    PtBr,
    /// US English: `R$1,234.50`.
    EnUs,
}

impl Locale {
    /// BCP 47 tag for this locale.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    /// Parse a BCP 47 tag, ignoring case and `_`/`-` differences.
    pub fn from_tag(tag: &str) -> Result<Self, CommerceError> {
        match tag.to_lowercase().replace('_', "-").as_str() {
            "pt-br" => Ok(Locale::PtBr),
            "en-us" => Ok(Locale::EnUs),
            _ => Err(CommerceError::UnknownLocale(tag.to_string())),
        }
    }

    /// (group separator, decimal separator)
    fn separators(&self) -> (char, char) {
        match self {
            Locale::PtBr => ('.', ','),
            Locale::EnUs => (',', '.'),
        }
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Locale::from_tag(&tag).map_err(de::Error::custom)
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., centavos).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit. Rejects NaN, infinities and values outside the `i64`
    /// minor-unit range.
    ///
    /// ```
    /// use adega_commerce::money::{Money, Currency};
    /// let price = Money::try_from_decimal(29.9, Currency::BRL).unwrap();
    /// assert_eq!(price.amount_cents, 2990);
    /// ```
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Result<Self, CommerceError> {
        let multiplier = 10_i64.pow(currency.decimal_places()) as f64;
        let scaled = (amount * multiplier).round();
        if !scaled.is_finite() || scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
            return Err(CommerceError::AmountOutOfRange(amount));
        }
        Ok(Self::new(scaled as i64, currency))
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a localized currency string.
    ///
    /// `pt-BR` puts a no-break space between symbol and amount, the same
    /// output browsers give for `toLocaleString('pt-BR', { style: 'currency' })`.
    pub fn format(&self, locale: Locale) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = self.amount_cents.unsigned_abs();
        let (group, decimal) = locale.separators();

        let mut number = group_digits(abs / divisor, group);
        if places > 0 {
            number.push(decimal);
            number.push_str(&format!("{:0width$}", abs % divisor, width = places as usize));
        }

        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let symbol = self.currency.symbol();
        match locale {
            Locale::PtBr => format!("{sign}{symbol}\u{a0}{number}"),
            Locale::EnUs => format!("{sign}{symbol}{number}"),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Locale::default()))
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Serde adapter for prices sent as plain decimal numbers in BRL.
///
/// ```ignore
/// #[serde(with = "adega_commerce::money::decimal")]
/// price: Money,
/// ```
pub mod decimal {
    use super::{Currency, Money};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::try_from_decimal(amount, Currency::BRL).map_err(de::Error::custom)
    }
}
