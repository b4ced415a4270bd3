//! Token selector — searchable picker over the catalog.
//!
//! - `filter` — the pure list computation (search + exclusion)
//! - `state` — per-instance open/search state with explicit transitions
//! - `interaction` — subscribe/unsubscribe hub for "interaction outside closes"

pub mod interaction;
pub mod state;

use crate::domain::exchange::price_label;
use crate::domain::token::{Token, TokenCatalog};
use crate::shared::Currency;
use serde::Serialize;

pub use interaction::{Interaction, InteractionHub, ListenerId, RegionId};
pub use state::TokenSelector;

/// Placeholder shown on the trigger when nothing is selected.
pub const PLACEHOLDER_LABEL: &str = "Select token";

/// Shown in place of the list when the filter matches nothing.
pub const EMPTY_LABEL: &str = "No tokens found";

/// Tokens whose currency contains `search` (case-insensitive), minus `exclude`.
///
/// The excluded currency is removed even when it matches the search.
pub fn filter<'a>(
    catalog: &'a TokenCatalog,
    search: &str,
    exclude: Option<&Currency>,
) -> Vec<&'a Token> {
    catalog
        .iter()
        .filter(|t| t.currency().matches_search(search))
        .filter(|t| exclude.map_or(true, |ex| t.currency() != ex))
        .collect()
}

/// One row of the dropdown list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorOption<'a> {
    pub token: &'a Token,
    pub selected: bool,
    pub price_label: String,
}

/// The dropdown body: either rows or the empty-state message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SelectorList<'a> {
    Options(Vec<SelectorOption<'a>>),
    Empty(&'static str),
}

/// Build the dropdown rows for a filtered list, flagging the current selection.
pub fn options<'a>(filtered: Vec<&'a Token>, selected: Option<&Token>) -> SelectorList<'a> {
    if filtered.is_empty() {
        return SelectorList::Empty(EMPTY_LABEL);
    }
    SelectorList::Options(
        filtered
            .into_iter()
            .map(|token| SelectorOption {
                token,
                selected: selected.is_some_and(|s| s.is_same_currency(token)),
                price_label: price_label(token),
            })
            .collect(),
    )
}

/// Trigger text: the selected currency or the placeholder.
pub fn trigger_label(selected: Option<&Token>) -> String {
    selected
        .map(|t| t.currency().to_string())
        .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price::PriceObservation;
    use chrono::{TimeZone, Utc};

    fn catalog(codes: &[&str]) -> TokenCatalog {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let feed: Vec<_> = codes
            .iter()
            .enumerate()
            .map(|(i, c)| PriceObservation::new(*c, date, Some(1.0 + i as f64)))
            .collect();
        TokenCatalog::build(&feed, "https://icons.example/tokens")
    }

    fn codes<'a>(tokens: &[&'a Token]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.currency().as_str()).collect()
    }

    #[test]
    fn test_empty_search_matches_all() {
        let c = catalog(&["ETH", "BTC", "ATOM"]);
        assert_eq!(codes(&filter(&c, "", None)), ["ATOM", "BTC", "ETH"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let c = catalog(&["STATOM", "ATOM", "STOSMO", "ETH"]);
        assert_eq!(codes(&filter(&c, "atom", None)), ["ATOM", "STATOM"]);
        assert_eq!(codes(&filter(&c, "ST", None)), ["STATOM", "STOSMO"]);
        assert!(filter(&c, "xyz", None).is_empty());
    }

    #[test]
    fn test_exclusion_applies_regardless_of_match() {
        let c = catalog(&["ETH", "BTC", "ATOM"]);
        let eth = Currency::from("ETH");
        assert_eq!(codes(&filter(&c, "", Some(&eth))), ["ATOM", "BTC"]);
        assert!(filter(&c, "eth", Some(&eth)).is_empty());
    }

    #[test]
    fn test_mutual_exclusion_for_every_pair() {
        let c = catalog(&["ETH", "BTC", "ATOM", "USDC"]);
        for from in c.iter() {
            for to in c.iter().filter(|t| !t.is_same_currency(from)) {
                let from_list = filter(&c, "", Some(to.currency()));
                let to_list = filter(&c, "", Some(from.currency()));
                assert!(from_list.iter().all(|t| !t.is_same_currency(to)));
                assert!(to_list.iter().all(|t| !t.is_same_currency(from)));
            }
        }
    }

    #[test]
    fn test_options_flag_selection_and_price() {
        let c = catalog(&["ETH", "BTC"]);
        let selected = c.find("ETH");
        match options(filter(&c, "", None), selected) {
            SelectorList::Options(rows) => {
                assert_eq!(rows.len(), 2);
                assert!(!rows[0].selected);
                assert!(rows[1].selected);
                assert_eq!(rows[0].price_label, "$2.00");
            }
            other => panic!("expected options, got {other:?}"),
        }
    }

    #[test]
    fn test_options_empty_state() {
        let c = catalog(&["ETH"]);
        assert_eq!(
            options(filter(&c, "zzz", None), None),
            SelectorList::Empty(EMPTY_LABEL)
        );
    }

    #[test]
    fn test_trigger_label() {
        let c = catalog(&["ETH"]);
        assert_eq!(trigger_label(None), "Select token");
        assert_eq!(trigger_label(c.find("ETH")), "ETH");
    }
}
