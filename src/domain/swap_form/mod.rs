//! Swap form domain — fields, validation and the submission state machine.

pub mod amount;
pub mod state;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use amount::is_amount_text;
pub use state::{SubmitDecision, SwapForm};
pub use validation::{validate, FormErrors, ValidationError};

// ─── SubmissionPhase ─────────────────────────────────────────────────────────

/// Submission lifecycle: `Idle → Validating → Submitting → Success → Idle`.
///
/// `Validating` only exists inside `SwapForm::submit` and is never observed
/// from outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "Idle",
            SubmissionPhase::Validating => "Validating",
            SubmissionPhase::Submitting => "Submitting",
            SubmissionPhase::Success => "Success",
        }
    }

    /// Text of the submit button in this phase.
    pub fn status_label(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle | SubmissionPhase::Validating => "Swap Tokens",
            SubmissionPhase::Submitting => "Swapping...",
            SubmissionPhase::Success => "Swap Successful!",
        }
    }
}

impl std::fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── FormField ───────────────────────────────────────────────────────────────

/// Fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FromToken,
    ToToken,
    FromAmount,
}
