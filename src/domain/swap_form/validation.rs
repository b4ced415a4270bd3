//! Field-scoped validation. Failures are data, never `Err`.

use super::FormField;
use crate::domain::exchange::parse_amount;
use crate::domain::token::Token;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationError {
    MissingFromToken,
    MissingToToken,
    InvalidAmount,
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::MissingFromToken => FormField::FromToken,
            ValidationError::MissingToToken => FormField::ToToken,
            ValidationError::InvalidAmount => FormField::FromAmount,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingFromToken => "Please select a token to swap from",
            ValidationError::MissingToToken => "Please select a token to swap to",
            ValidationError::InvalidAmount => "Please enter a valid amount greater than 0",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-field error messages currently shown on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors(BTreeMap<FormField, ValidationError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: ValidationError) {
        self.0.insert(error.field(), error);
    }

    /// Remove one field's error; returns whether there was one.
    pub fn clear_field(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: FormField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: FormField) -> Option<&'static str> {
        self.get(field).map(|e| e.message())
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, ValidationError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}

/// Check every field independently; an empty result means the form may submit.
pub fn validate(from: Option<&Token>, to: Option<&Token>, amount_text: &str) -> FormErrors {
    let mut errors = FormErrors::new();
    if from.is_none() {
        errors.insert(ValidationError::MissingFromToken);
    }
    if to.is_none() {
        errors.insert(ValidationError::MissingToToken);
    }
    if !parse_amount(amount_text).is_some_and(|a| a > 0.0) {
        errors.insert(ValidationError::InvalidAmount);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(currency: &str) -> Token {
        Token::new(currency, 1.0, "https://icons.example/tokens").unwrap()
    }

    #[test]
    fn test_empty_form_yields_three_errors() {
        let errors = validate(None, None, "");
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.message(FormField::FromToken),
            Some("Please select a token to swap from")
        );
        assert_eq!(
            errors.message(FormField::ToToken),
            Some("Please select a token to swap to")
        );
        assert_eq!(
            errors.message(FormField::FromAmount),
            Some("Please enter a valid amount greater than 0")
        );
    }

    #[test]
    fn test_amount_must_be_positive() {
        let (a, b) = (token("ETH"), token("BTC"));
        for text in ["", ".", "0", "0.0", "00."] {
            let errors = validate(Some(&a), Some(&b), text);
            assert_eq!(errors.len(), 1, "{text:?}");
            assert!(errors.contains(FormField::FromAmount));
        }
        assert!(validate(Some(&a), Some(&b), "0.01").is_empty());
        assert!(validate(Some(&a), Some(&b), "1.").is_empty());
    }

    #[test]
    fn test_clear_field_is_scoped() {
        let mut errors = validate(None, None, "");
        assert!(errors.clear_field(FormField::ToToken));
        assert!(!errors.clear_field(FormField::ToToken));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(FormField::FromToken));
        assert!(errors.contains(FormField::FromAmount));
    }

    #[test]
    fn test_display_is_message() {
        assert_eq!(
            ValidationError::MissingToToken.to_string(),
            "Please select a token to swap to"
        );
    }
}
