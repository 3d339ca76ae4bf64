//! Configuration types and defaults.

use serde::{Deserialize, Serialize};

/// What `check` does when an environment variable uses the reserved prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RestrictedEnvPolicy {
    /// Fail the check (default, matches the service's own rejection).
    #[default]
    Fail,
    /// Report the names but let the check pass.
    Warn,
    /// Do not look at environment variables.
    Ignore,
}

pub(crate) fn default_true() -> bool {
    true
}
