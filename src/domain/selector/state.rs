//! Selector state container — app-owned, SDK-provided transitions.

use super::filter;
use crate::domain::token::{Token, TokenCatalog};
use crate::shared::Currency;

/// Local state of one selector instance.
///
/// `open` and `search` belong to this instance only. `disabled` and `exclude`
/// are pushed in by the coordinator (the opposite side's selection, the
/// submission gate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSelector {
    open: bool,
    search: String,
    disabled: bool,
    exclude: Option<Currency>,
}

impl TokenSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn excluded(&self) -> Option<&Currency> {
        self.exclude.as_ref()
    }

    /// Open the dropdown. Refused while disabled; returns whether it is open.
    pub fn open(&mut self) -> bool {
        if !self.disabled {
            self.open = true;
        }
        self.open
    }

    /// Close the dropdown and reset the search.
    pub fn close(&mut self) {
        self.open = false;
        self.search.clear();
    }

    /// Trigger click: open if closed, close if open.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
            false
        } else {
            self.open()
        }
    }

    /// Typing in the search box. Ignored while closed.
    pub fn set_search(&mut self, text: &str) {
        if self.open {
            self.search = text.to_string();
        }
    }

    /// An interaction landed outside this selector.
    pub fn dismiss(&mut self) {
        if self.open {
            self.close();
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.close();
        }
    }

    pub fn set_excluded(&mut self, currency: Option<Currency>) {
        self.exclude = currency;
    }

    /// The tokens currently offered by this selector.
    pub fn visible<'a>(&self, catalog: &'a TokenCatalog) -> Vec<&'a Token> {
        filter(catalog, &self.search, self.exclude.as_ref())
    }

    /// Pick `token`: runs `on_select`, closes the dropdown and clears the search.
    ///
    /// Refused (returns `false`, callback not run) while disabled or when the
    /// token is the one excluded by the opposite side.
    pub fn select<F>(&mut self, token: &Token, on_select: F) -> bool
    where
        F: FnOnce(&Token),
    {
        if self.disabled || self.exclude.as_ref() == Some(token.currency()) {
            return false;
        }
        on_select(token);
        self.close();
        true
    }
}
