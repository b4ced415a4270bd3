//! Token catalog — dedup, rank and sort a raw price feed into one token per currency.

use super::Token;
use crate::domain::price::PriceObservation;
use crate::shared::Currency;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sorted, deduplicated tokens available for selection.
///
/// Immutable once built; a new feed fetch builds a new catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenCatalog {
    tokens: Vec<Token>,
}

impl TokenCatalog {
    /// Build a catalog from raw observations. The input is never mutated.
    ///
    /// 1. observations without a positive, finite price are dropped
    /// 2. per currency, the latest `date` wins; equal dates keep the first seen
    /// 3. tokens are sorted by currency, case-insensitive
    pub fn build(observations: &[PriceObservation], icon_base_url: &str) -> Self {
        // currency -> index into `latest`, preserving first-seen order
        let mut index: HashMap<&Currency, usize> = HashMap::new();
        let mut latest: Vec<(&Currency, DateTime<Utc>, f64)> = Vec::new();
        let mut discarded = 0usize;

        for obs in observations {
            let Some(price) = obs.valid_price() else {
                discarded += 1;
                continue;
            };

            match index.get(&obs.currency) {
                Some(&i) => {
                    // date against date; a later observation replaces, a tie does not
                    if obs.date > latest[i].1 {
                        latest[i] = (&obs.currency, obs.date, price);
                    }
                }
                None => {
                    index.insert(&obs.currency, latest.len());
                    latest.push((&obs.currency, obs.date, price));
                }
            }
        }

        let mut tokens: Vec<Token> = latest
            .into_iter()
            .filter_map(|(currency, _, price)| Token::new(currency.clone(), price, icon_base_url).ok())
            .collect();
        tokens.sort_by(|a, b| a.currency().cmp_display(b.currency()));

        tracing::debug!(
            observations = observations.len(),
            discarded,
            tokens = tokens.len(),
            "Built token catalog"
        );

        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn get(&self, currency: &Currency) -> Option<&Token> {
        self.tokens.iter().find(|t| t.currency() == currency)
    }

    pub fn find(&self, currency: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.currency().as_str() == currency)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a TokenCatalog {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const BASE: &str = "https://icons.example/tokens";

    fn obs(currency: &str, day: u32, price: Option<f64>) -> PriceObservation {
        PriceObservation::new(
            currency,
            Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            price,
        )
    }

    fn summary(catalog: &TokenCatalog) -> Vec<(String, f64)> {
        catalog
            .iter()
            .map(|t| (t.currency().to_string(), t.price()))
            .collect()
    }

    #[test]
    fn test_later_date_wins_and_sorted() {
        let feed = vec![
            obs("ETH", 1, Some(2000.0)),
            obs("ETH", 2, Some(2500.0)),
            obs("BTC", 1, Some(40000.0)),
        ];
        let catalog = TokenCatalog::build(&feed, BASE);
        assert_eq!(
            summary(&catalog),
            vec![("BTC".to_string(), 40000.0), ("ETH".to_string(), 2500.0)]
        );
    }

    #[test]
    fn test_later_date_wins_regardless_of_order_or_price() {
        // The newer observation has the lower price and comes first.
        let feed = vec![obs("ETH", 5, Some(10.0)), obs("ETH", 3, Some(99999.0))];
        let catalog = TokenCatalog::build(&feed, BASE);
        assert_eq!(catalog.find("ETH").unwrap().price(), 10.0);
    }

    #[test]
    fn test_equal_dates_keep_first_seen() {
        let feed = vec![obs("ATOM", 1, Some(7.0)), obs("ATOM", 1, Some(8.0))];
        let catalog = TokenCatalog::build(&feed, BASE);
        assert_eq!(catalog.find("ATOM").unwrap().price(), 7.0);
    }

    #[test]
    fn test_invalid_prices_never_affect_result() {
        let feed = vec![
            obs("OSMO", 1, Some(0.5)),
            obs("OSMO", 9, Some(0.0)),
            obs("OSMO", 8, Some(-2.0)),
            obs("OSMO", 7, None),
            obs("LUNA", 1, None),
            obs("ZERO", 1, Some(0.0)),
        ];
        let catalog = TokenCatalog::build(&feed, BASE);
        assert_eq!(summary(&catalog), vec![("OSMO".to_string(), 0.5)]);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let feed = vec![
            obs("USDC", 1, Some(1.0)),
            obs("bNEO", 1, Some(7.1)),
            obs("ATOM", 1, Some(7.2)),
            obs("ampLUNA", 1, Some(0.4)),
        ];
        let catalog = TokenCatalog::build(&feed, BASE);
        let codes: Vec<_> = catalog.iter().map(|t| t.currency().as_str()).collect();
        assert_eq!(codes, ["ampLUNA", "ATOM", "bNEO", "USDC"]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let feed = vec![
            obs("SWTH", 2, Some(0.004)),
            obs("ETH", 1, Some(1645.9)),
            obs("swth", 1, Some(0.003)),
            obs("ETH", 3, Some(1646.0)),
        ];
        let first = TokenCatalog::build(&feed, BASE);
        let second = TokenCatalog::build(&feed, BASE);
        assert_eq!(first, second);
        let codes: Vec<_> = first.iter().map(|t| t.currency().as_str()).collect();
        assert_eq!(codes, ["ETH", "SWTH", "swth"]);
    }

    #[test]
    fn test_at_most_one_token_per_currency() {
        let feed: Vec<_> = (1..=20).map(|d| obs("USD", d, Some(d as f64))).collect();
        let catalog = TokenCatalog::build(&feed, BASE);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("USD").unwrap().price(), 20.0);
    }

    #[test]
    fn test_icon_urls_are_derived() {
        let catalog = TokenCatalog::build(&[obs("ETH", 1, Some(1.0))], BASE);
        assert_eq!(
            catalog.find("ETH").unwrap().icon_url(),
            "https://icons.example/tokens/ETH.svg"
        );
    }

    #[test]
    fn test_empty_feed() {
        let catalog = TokenCatalog::build(&[], BASE);
        assert!(catalog.is_empty());
        assert!(catalog.get(&Currency::from("ETH")).is_none());
    }
}
