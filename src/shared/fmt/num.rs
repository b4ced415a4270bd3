//! Number formatting utilities for human-readable display.
//!
//! Handles f64 values with fixed or bounded fraction digits and comma separators.

/// Inserts thousands separators into the integer part of a formatted number.
fn group_integer_part(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let grouped = digits
        .chars()
        .rev()
        .collect::<String>()
        .as_bytes()
        .chunks(3)
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
        .chars()
        .rev()
        .collect::<String>();

    format!("{}{}", sign, grouped)
}

/// Adds thousands separators to an already-formatted decimal string.
pub fn group_thousands(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_integer_part(integer), fraction),
        None => group_integer_part(formatted),
    }
}

/// Format with exactly `decimals` fraction digits and thousands separators.
pub fn display_fixed(amount: f64, decimals: usize) -> String {
    group_thousands(&format!("{:.1$}", amount, decimals))
}

/// Format with at least `min` and at most `max` fraction digits.
///
/// Rounds to `max` digits, then trims trailing zeros down to `min`.
pub fn display_bounded(amount: f64, min: usize, max: usize) -> String {
    let max = max.max(min);
    let formatted = format!("{:.1$}", amount, max);
    let trimmed = match formatted.split_once('.') {
        Some((integer, fraction)) => {
            let keep = fraction.trim_end_matches('0').len().max(min);
            if keep == 0 {
                integer.to_string()
            } else {
                format!("{}.{}", integer, &fraction[..keep])
            }
        }
        None => formatted,
    };
    group_thousands(&trimmed)
}

/// USD value of an amount: `$` prefix, two fraction digits.
pub fn display_usd(amount: f64) -> String {
    format!("${}", display_fixed(amount, 2))
}
