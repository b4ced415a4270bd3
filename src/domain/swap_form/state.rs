//! Swap form state container — the only owner of form mutations.

use super::validation::validate;
use super::{is_amount_text, FormErrors, FormField, SubmissionPhase};
use crate::domain::exchange;
use crate::domain::token::Token;
use crate::shared::Side;

/// Result of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Not in `Idle`; nothing happened.
    Ignored,
    /// Validation failed; the form stays `Idle` with these errors.
    Rejected(FormErrors),
    /// Now `Submitting`; the caller owns scheduling the settlement.
    Accepted,
}

/// Swap form state: selections, raw amount text, phase and per-field errors.
///
/// Every mutating method is a no-op (returning `false`) outside the phase it is
/// allowed in. When both tokens are set they always have different currencies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapForm {
    from_token: Option<Token>,
    to_token: Option<Token>,
    from_amount: String,
    phase: SubmissionPhase,
    errors: FormErrors,
}

impl SwapForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn from_token(&self) -> Option<&Token> {
        self.from_token.as_ref()
    }

    pub fn to_token(&self) -> Option<&Token> {
        self.to_token.as_ref()
    }

    pub fn token(&self, side: Side) -> Option<&Token> {
        match side {
            Side::From => self.from_token(),
            Side::To => self.to_token(),
        }
    }

    pub fn from_amount(&self) -> &str {
        &self.from_amount
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_idle(&self) -> bool {
        self.phase == SubmissionPhase::Idle
    }

    /// Inputs (amount, selectors, direction toggle) are disabled while submitting.
    pub fn inputs_disabled(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Submit is clickable only from `Idle`.
    pub fn submit_enabled(&self) -> bool {
        self.is_idle()
    }

    // ── Edits ────────────────────────────────────────────────────────────

    /// Replace the amount text. Rejects anything that is not digits with at
    /// most one `.`; an accepted edit clears the amount error.
    pub fn edit_amount(&mut self, text: &str) -> bool {
        if !self.is_idle() || !is_amount_text(text) {
            return false;
        }
        self.from_amount = text.to_string();
        self.errors.clear_field(FormField::FromAmount);
        true
    }

    /// Set one side's token. Refused if it is the opposite side's currency.
    pub fn select(&mut self, side: Side, token: Token) -> bool {
        if !self.is_idle() {
            return false;
        }
        if self
            .token(side.opposite())
            .is_some_and(|other| other.is_same_currency(&token))
        {
            return false;
        }
        let field = match side {
            Side::From => {
                self.from_token = Some(token);
                FormField::FromToken
            }
            Side::To => {
                self.to_token = Some(token);
                FormField::ToToken
            }
        };
        self.errors.clear_field(field);
        true
    }

    pub fn select_from(&mut self, token: Token) -> bool {
        self.select(Side::From, token)
    }

    pub fn select_to(&mut self, token: Token) -> bool {
        self.select(Side::To, token)
    }

    /// Exchange from/to atomically. The amount stays where it is: what the
    /// user typed remains the "pay" amount in the new direction.
    pub fn swap_direction(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        std::mem::swap(&mut self.from_token, &mut self.to_token);
        self.errors.clear();
        true
    }

    // ── Submission state machine ─────────────────────────────────────────

    pub fn submit(&mut self) -> SubmitDecision {
        if !self.is_idle() {
            return SubmitDecision::Ignored;
        }

        self.phase = SubmissionPhase::Validating;
        self.errors = validate(
            self.from_token.as_ref(),
            self.to_token.as_ref(),
            &self.from_amount,
        );

        if self.errors.is_empty() {
            self.phase = SubmissionPhase::Submitting;
            tracing::debug!(
                from = %self.from_token.as_ref().map(|t| t.currency().as_str()).unwrap_or_default(),
                to = %self.to_token.as_ref().map(|t| t.currency().as_str()).unwrap_or_default(),
                amount = %self.from_amount,
                "Swap submitted"
            );
            SubmitDecision::Accepted
        } else {
            self.phase = SubmissionPhase::Idle;
            SubmitDecision::Rejected(self.errors.clone())
        }
    }

    /// `Submitting → Success` once the (simulated) settlement completes.
    pub fn settle(&mut self) -> bool {
        if self.phase != SubmissionPhase::Submitting {
            return false;
        }
        self.phase = SubmissionPhase::Success;
        true
    }

    /// `Success → Idle`: clears the amount, keeps both selections.
    pub fn reset_after_success(&mut self) -> bool {
        if self.phase != SubmissionPhase::Success {
            return false;
        }
        self.from_amount.clear();
        self.phase = SubmissionPhase::Idle;
        true
    }

    // ── Derived values ───────────────────────────────────────────────────

    pub fn exchange_rate(&self) -> Option<f64> {
        exchange::rate_between(self.from_token.as_ref(), self.to_token.as_ref())
    }

    /// Read-only "receive" amount; empty when there is nothing to convert.
    pub fn receive_amount(&self) -> String {
        exchange::convert(&self.from_amount, self.exchange_rate()).unwrap_or_default()
    }

    pub fn rate_display(&self) -> Option<String> {
        match (&self.from_token, &self.to_token) {
            (Some(f), Some(t)) => Some(exchange::rate_display(f, t)),
            _ => None,
        }
    }

    pub fn pay_usd_value(&self) -> Option<String> {
        self.from_token
            .as_ref()
            .and_then(|t| exchange::usd_value(&self.from_amount, t))
    }

    pub fn receive_usd_value(&self) -> Option<String> {
        let receive = self.receive_amount();
        self.to_token
            .as_ref()
            .and_then(|t| exchange::usd_value(&receive, t))
    }

    pub fn status_label(&self) -> &'static str {
        self.phase.status_label()
    }
}
