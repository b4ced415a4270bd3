//! Token icon resolution with a deterministic fallback glyph.
//!
//! A failed icon load is never an error: the render state just flips to the
//! currency's initial.

use super::Token;
use serde::{Deserialize, Serialize};

/// What to render for a token's icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenIcon {
    /// Load the image at this URL.
    Image(String),
    /// Show this glyph instead (first character of the currency, uppercased).
    Fallback(char),
}

impl TokenIcon {
    pub fn fallback_for(token: &Token) -> Self {
        TokenIcon::Fallback(token.currency().initial())
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TokenIcon::Fallback(_))
    }
}

/// Per-render icon state for one token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IconState {
    failed: bool,
}

impl IconState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The image could not be loaded; switch to the fallback for good.
    pub fn load_failed(&mut self) {
        if !self.failed {
            tracing::debug!("Token icon failed to load, using fallback glyph");
        }
        self.failed = true;
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn resolve(&self, token: &Token) -> TokenIcon {
        if self.failed {
            TokenIcon::fallback_for(token)
        } else {
            TokenIcon::Image(token.icon_url().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(currency: &str) -> Token {
        Token::new(currency, 1.0, "https://icons.example/tokens").unwrap()
    }

    #[test]
    fn test_resolves_image_until_failure() {
        let t = token("ETH");
        let mut state = IconState::new();
        assert_eq!(
            state.resolve(&t),
            TokenIcon::Image("https://icons.example/tokens/ETH.svg".to_string())
        );

        state.load_failed();
        assert!(state.has_failed());
        assert_eq!(state.resolve(&t), TokenIcon::Fallback('E'));
    }

    #[test]
    fn test_fallback_uppercases_initial() {
        let t = token("bNEO");
        assert_eq!(TokenIcon::fallback_for(&t), TokenIcon::Fallback('B'));
        assert!(TokenIcon::fallback_for(&t).is_fallback());
    }

    #[test]
    fn test_repeated_failures_are_idempotent() {
        let t = token("usdc");
        let mut state = IconState::new();
        state.load_failed();
        state.load_failed();
        assert_eq!(state.resolve(&t), TokenIcon::Fallback('U'));
    }
}
