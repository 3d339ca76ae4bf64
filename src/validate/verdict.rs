//! The validation verdict.

use crate::catalogue::{Rule, Severity};
use crate::error::{CheckResult, InvalidInput};

/// Outcome of a validation check.
///
/// Message-returning checks produce a `Verdict` directly. Precondition checks
/// return `Result<(), InvalidInput>`; both convert into each other so callers
/// can handle every check through one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(InvalidInput),
}

impl Verdict {
    /// A recoverable or fatal violation of `rule`, per the catalogue severity.
    pub fn invalid(rule: Rule) -> Self {
        Verdict::Invalid(InvalidInput::new(rule))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The catalogue message, or the empty string when valid.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Valid => "",
            Verdict::Invalid(invalid) => invalid.message(),
        }
    }

    pub fn rule(&self) -> Option<Rule> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(invalid) => Some(invalid.rule),
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(invalid) => Some(invalid.severity),
        }
    }

    pub fn into_result(self) -> CheckResult {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::Invalid(invalid) => Err(invalid),
        }
    }
}

impl From<CheckResult> for Verdict {
    fn from(result: CheckResult) -> Self {
        match result {
            Ok(()) => Verdict::Valid,
            Err(invalid) => Verdict::Invalid(invalid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_verdict_has_empty_message() {
        assert_eq!(Verdict::Valid.message(), "");
        assert!(Verdict::Valid.rule().is_none());
        assert!(Verdict::Valid.into_result().is_ok());
    }

    #[test]
    fn invalid_verdict_carries_rule_and_severity() {
        let verdict = Verdict::invalid(Rule::CacheType);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.rule(), Some(Rule::CacheType));
        assert_eq!(verdict.severity(), Some(Severity::Recoverable));
        assert_eq!(
            verdict.message(),
            "Cache type override must be one of 'S3', 'NO_CACHE', 'LOCAL'"
        );
    }

    #[test]
    fn converts_from_precondition_result() {
        let verdict = Verdict::from(Err(InvalidInput::new(Rule::RegionInvalid)));
        assert_eq!(verdict.severity(), Some(Severity::Fatal));
        assert_eq!(verdict.message(), "Enter a valid AWS region");

        assert_eq!(Verdict::from(Ok(())), Verdict::Valid);
    }
}
