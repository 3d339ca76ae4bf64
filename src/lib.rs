//! Buildgate: preflight validation of build override configuration.
//!
//! Before a build is submitted to the remote build service, every
//! user-supplied override in a [`ConfigurationSnapshot`] is checked against
//! the service's accepted vocabularies and ranges, so that obviously invalid
//! requests fail fast and locally with field-specific guidance.
//!
//! ```
//! use buildgate::snapshot::ConfigurationSnapshot;
//! use buildgate::validate::{check_essential_config, check_start_build_overrides_config};
//!
//! let snapshot = ConfigurationSnapshot {
//!     project_name: "my-project".to_string(),
//!     source_control_type: "project".to_string(),
//!     compute_type_override: "BUILD_GENERAL1_HUGE".to_string(),
//!     ..Default::default()
//! };
//!
//! assert_eq!(check_essential_config(&snapshot).message(), "");
//! assert_eq!(
//!     check_start_build_overrides_config(&snapshot).message(),
//!     "Compute type override must be one of 'BUILD_GENERAL1_SMALL', 'BUILD_GENERAL1_MEDIUM', 'BUILD_GENERAL1_LARGE'"
//! );
//! ```

pub mod catalogue;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod snapshot;
pub mod validate;
pub mod vocabulary;

#[cfg(test)]
mod test_support;

pub use catalogue::{Rule, Severity};
pub use error::{CheckResult, GateError, InvalidInput, Result};
pub use snapshot::ConfigurationSnapshot;
pub use validate::Verdict;
