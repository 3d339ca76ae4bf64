//! GateConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a buildgate run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Append one NDJSON audit event per `check` run to this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_log: Option<String>,

    /// Handling of environment variables that use the reserved prefix.
    #[serde(default)]
    pub restricted_env_policy: RestrictedEnvPolicy,

    /// Whether to check job-supplied source overrides for consistency.
    #[serde(default = "default_true")]
    pub check_source_overrides: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            events_log: None,
            restricted_env_policy: RestrictedEnvPolicy::default(),
            check_source_overrides: default_true(),
        }
    }
}
