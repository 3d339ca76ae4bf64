//! Error types for buildgate.
//!
//! Uses thiserror for derive macros. Violations of catalogue rules are carried
//! by [`InvalidInput`]; everything else is a [`GateError`] variant.

use crate::catalogue::{Rule, Severity};
use crate::exit_codes;
use thiserror::Error;

/// A violated catalogue rule.
///
/// Displays as the rule's literal catalogue message, which is the contract
/// surfaced to end users.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}", .rule.message())]
pub struct InvalidInput {
    /// The rule that was violated.
    pub rule: Rule,
    /// Whether the caller may treat this as a recoverable validation failure
    /// or must abort the current build attempt.
    pub severity: Severity,
}

impl InvalidInput {
    /// Create an invalid-input condition for a rule, using the rule's catalogue severity.
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            severity: rule.severity(),
        }
    }

    /// The literal catalogue message for the violated rule.
    pub fn message(&self) -> &'static str {
        self.rule.message()
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

/// Main error type for buildgate operations.
#[derive(Error, Debug)]
pub enum GateError {
    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// A check outside the rule catalogue failed (e.g. restricted env var names).
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A catalogue rule was violated.
    #[error("{0}")]
    InvalidInput(#[from] InvalidInput),

    /// An injected collaborator (object storage, logs client) failed.
    #[error("Collaborator call failed: {0}")]
    Collaborator(String),
}

impl GateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GateError::UserError(_) => exit_codes::USER_ERROR,
            GateError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            GateError::InvalidInput(invalid) if invalid.is_fatal() => exit_codes::INVALID_INPUT,
            GateError::InvalidInput(_) => exit_codes::VALIDATION_FAILURE,
            GateError::Collaborator(_) => exit_codes::COLLABORATOR_FAILURE,
        }
    }
}

/// Result type alias for buildgate operations.
pub type Result<T> = std::result::Result<T, GateError>;

/// Outcome of a precondition check.
pub type CheckResult = std::result::Result<(), InvalidInput>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = GateError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn recoverable_rule_maps_to_validation_failure() {
        let err = GateError::from(InvalidInput::new(Rule::ComputeType));
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    }

    #[test]
    fn fatal_rule_maps_to_invalid_input() {
        let err = GateError::from(InvalidInput::new(Rule::RegionInvalid));
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn collaborator_error_has_correct_exit_code() {
        let err = GateError::Collaborator("access denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::COLLABORATOR_FAILURE);
    }

    #[test]
    fn invalid_input_displays_catalogue_message() {
        let err = InvalidInput::new(Rule::ProjectRequired);
        assert_eq!(err.to_string(), "CodeBuild project name is required");

        let err = GateError::from(err);
        assert_eq!(err.to_string(), "CodeBuild project name is required");
    }

    #[test]
    fn validation_error_is_prefixed() {
        let err = GateError::ValidationError("reserved env var".to_string());
        assert_eq!(err.to_string(), "Validation failed: reserved env var");
    }
}
