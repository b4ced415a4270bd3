//! Lexical rule for the "pay" amount field.

/// `true` if `text` is empty or digits with at most one `.` anywhere.
///
/// Incomplete shapes like `"1."`, `"."` or `".5"` are accepted here; whether
/// they form a usable amount is decided at validation time.
pub fn is_amount_text(text: &str) -> bool {
    let mut seen_dot = false;
    text.chars().all(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    })
}
