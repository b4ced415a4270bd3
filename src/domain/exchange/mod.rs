//! Exchange math — rates and converted amounts.
//!
//! Plain f64 arithmetic; the only rounding is the fixed-point formatting at
//! the display boundary.

use crate::domain::token::Token;
use crate::shared::fmt::num::display_usd;

/// Fraction digits used for converted amounts and rates.
pub const AMOUNT_DECIMALS: usize = 6;

/// How many `to` units one `from` unit buys.
pub fn rate(from: &Token, to: &Token) -> f64 {
    from.price() / to.price()
}

/// Rate when both sides are chosen, `None` otherwise.
pub fn rate_between(from: Option<&Token>, to: Option<&Token>) -> Option<f64> {
    match (from, to) {
        (Some(f), Some(t)) => Some(rate(f, t)),
        _ => None,
    }
}

/// Parse user amount text. Unparsable, negative or non-finite text is "no amount".
pub fn parse_amount(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Converted amount with six fraction digits, or `None` when there is
/// nothing to convert.
pub fn convert(amount_text: &str, rate: Option<f64>) -> Option<String> {
    let rate = rate?;
    let amount = parse_amount(amount_text)?;
    Some(format!("{:.1$}", amount * rate, AMOUNT_DECIMALS))
}

/// `1 <FROM> = <rate> <TO>` with the rate fixed to six decimals.
pub fn rate_display(from: &Token, to: &Token) -> String {
    format!(
        "1 {} = {:.3$} {}",
        from.currency(),
        rate(from, to),
        to.currency(),
        AMOUNT_DECIMALS
    )
}

/// Approximate USD value of an amount of `token`, e.g. `≈ $5,000.00`.
pub fn usd_value(amount_text: &str, token: &Token) -> Option<String> {
    if amount_text.is_empty() {
        return None;
    }
    let amount = parse_amount(amount_text)?;
    Some(format!("≈ {}", display_usd(amount * token.price())))
}

/// Price label for catalog rows: `$` plus two to six fraction digits.
pub fn price_label(token: &Token) -> String {
    format!(
        "${}",
        crate::shared::fmt::num::display_bounded(token.price(), 2, AMOUNT_DECIMALS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://icons.example/tokens";

    fn token(currency: &str, price: f64) -> Token {
        Token::new(currency, price, BASE).unwrap()
    }

    #[test]
    fn test_rate_and_convert_scenario() {
        let eth = token("ETH", 2500.0);
        let btc = token("BTC", 40000.0);
        let r = rate(&eth, &btc);
        assert_eq!(r, 0.0625);
        assert_eq!(convert("2", Some(r)).as_deref(), Some("0.125000"));
    }

    #[test]
    fn test_rate_symmetry() {
        let pairs = [(1645.93, 0.004), (7.128, 7.128), (0.000001, 40000.0), (3.3, 1.1)];
        for (a, b) in pairs {
            let x = token("A", a);
            let y = token("B", b);
            let product = rate(&x, &y) * rate(&y, &x);
            assert!((product - 1.0).abs() < 1e-12, "{a}/{b} -> {product}");
        }
    }

    #[test]
    fn test_rate_between_requires_both() {
        let eth = token("ETH", 2500.0);
        assert!(rate_between(Some(&eth), None).is_none());
        assert!(rate_between(None, Some(&eth)).is_none());
        assert!(rate_between(None, None).is_none());
        assert_eq!(rate_between(Some(&eth), Some(&eth)), Some(1.0));
    }

    #[test]
    fn test_convert_returns_none_without_amount_or_rate() {
        assert_eq!(convert("", Some(2.0)), None);
        assert_eq!(convert(".", Some(2.0)), None);
        assert_eq!(convert("abc", Some(2.0)), None);
        assert_eq!(convert("-1", Some(2.0)), None);
        assert_eq!(convert("1", None), None);
    }

    #[test]
    fn test_convert_tolerates_partial_input() {
        assert_eq!(convert("1.", Some(2.0)).as_deref(), Some("2.000000"));
        assert_eq!(convert(".5", Some(2.0)).as_deref(), Some("1.000000"));
        assert_eq!(convert("0", Some(2.0)).as_deref(), Some("0.000000"));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("-0.1"), None);
    }

    #[test]
    fn test_rate_display() {
        let eth = token("ETH", 2500.0);
        let btc = token("BTC", 40000.0);
        assert_eq!(rate_display(&eth, &btc), "1 ETH = 0.062500 BTC");
        assert_eq!(rate_display(&btc, &eth), "1 BTC = 16.000000 ETH");
    }

    #[test]
    fn test_usd_value() {
        let eth = token("ETH", 2500.0);
        assert_eq!(usd_value("2", &eth).as_deref(), Some("≈ $5,000.00"));
        assert_eq!(usd_value("", &eth), None);
        assert_eq!(usd_value(".", &eth), None);
    }

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(&token("BTC", 40000.0)), "$40,000.00");
        assert_eq!(price_label(&token("SWTH", 0.00403)), "$0.00403");
    }
}
