//! Token domain — canonical per-currency tokens and the catalog built from the feed.

pub mod catalog;
pub mod icon;

use crate::network::TOKEN_ICON_EXTENSION;
use crate::shared::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use catalog::TokenCatalog;
pub use icon::{IconState, TokenIcon};

// ─── Token ───────────────────────────────────────────────────────────────────

/// Canonical, deduplicated record for one currency.
///
/// `price` is always strictly positive and finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    currency: Currency,
    price: f64,
    icon_url: String,
}

impl Token {
    pub fn new(
        currency: impl Into<Currency>,
        price: f64,
        icon_base_url: &str,
    ) -> Result<Self, TokenError> {
        let currency = currency.into();
        if !(price.is_finite() && price > 0.0) {
            return Err(TokenError::NonPositivePrice(currency.to_string(), price));
        }
        let icon_url = icon_url(icon_base_url, &currency);
        Ok(Self {
            currency,
            price,
            icon_url,
        })
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Constructed icon location; never fetched or checked here.
    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }

    pub fn is_same_currency(&self, other: &Token) -> bool {
        self.currency == other.currency
    }
}

/// `<base>/<currency>.svg`, with the currency percent-encoded.
pub fn icon_url(icon_base_url: &str, currency: &Currency) -> String {
    format!(
        "{}/{}.{}",
        icon_base_url.trim_end_matches('/'),
        urlencoding::encode(currency.as_str()),
        TOKEN_ICON_EXTENSION
    )
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenError {
    NonPositivePrice(String, f64),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::NonPositivePrice(c, p) => write!(f, "Invalid price {p} for {c}"),
        }
    }
}

impl std::error::Error for TokenError {}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://icons.example/tokens";

    #[test]
    fn test_token_icon_url() {
        let t = Token::new("ETH", 1645.93, BASE).unwrap();
        assert_eq!(t.icon_url(), "https://icons.example/tokens/ETH.svg");
    }

    #[test]
    fn test_icon_url_trims_base_slash_and_encodes() {
        let url = icon_url("https://icons.example/tokens/", &Currency::from("A B"));
        assert_eq!(url, "https://icons.example/tokens/A%20B.svg");
    }

    #[test]
    fn test_token_rejects_non_positive_price() {
        assert!(Token::new("ETH", 0.0, BASE).is_err());
        assert!(Token::new("ETH", -3.0, BASE).is_err());
        assert!(Token::new("ETH", f64::NAN, BASE).is_err());
        let err = Token::new("ETH", -3.0, BASE).unwrap_err();
        assert!(err.to_string().contains("ETH"));
    }

    #[test]
    fn test_is_same_currency() {
        let a = Token::new("ETH", 1.0, BASE).unwrap();
        let b = Token::new("ETH", 2.0, BASE).unwrap();
        let c = Token::new("eth", 1.0, BASE).unwrap();
        assert!(a.is_same_currency(&b));
        assert!(!a.is_same_currency(&c));
    }
}
