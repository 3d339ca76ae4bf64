//! Snapshot struct definition.

use super::de::lenient_string;
use serde::{Deserialize, Serialize};

/// A user-defined environment variable passed through to the build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentVariable {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub value: String,
}

impl EnvironmentVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Resolved build configuration, captured before submission.
///
/// Every field is already expanded from any upstream parameter syntax. An
/// empty string means "no override, use the service or project default".
/// Unknown fields in a snapshot file are ignored; missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationSnapshot {
    // =========================================================================
    // Essential settings
    // =========================================================================
    /// Name of the remote build project (required).
    #[serde(deserialize_with = "lenient_string")]
    pub project_name: String,

    /// `jenkins` (source uploaded by the job) or `project` (source defined by the project).
    #[serde(deserialize_with = "lenient_string")]
    pub source_control_type: String,

    // =========================================================================
    // Start-build overrides
    // =========================================================================
    #[serde(deserialize_with = "lenient_string")]
    pub artifact_type_override: String,
    #[serde(deserialize_with = "lenient_string")]
    pub artifact_packaging_override: String,
    #[serde(deserialize_with = "lenient_string")]
    pub artifact_namespace_override: String,
    #[serde(deserialize_with = "lenient_string")]
    pub source_type_override: String,
    #[serde(deserialize_with = "lenient_string")]
    pub source_location_override: String,
    #[serde(deserialize_with = "lenient_string")]
    pub compute_type_override: String,
    #[serde(deserialize_with = "lenient_string")]
    pub environment_type_override: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cache_type_override: String,

    /// Bracketed, comma-separated list, e.g. `[LOCAL_SOURCE_CACHE,LOCAL_CUSTOM_CACHE]`.
    #[serde(deserialize_with = "lenient_string")]
    pub cache_modes_override: String,

    #[serde(deserialize_with = "lenient_string")]
    pub cloud_watch_logs_status_override: String,
    #[serde(deserialize_with = "lenient_string")]
    pub s3_logs_status_override: String,

    /// Build timeout in minutes, as entered.
    #[serde(deserialize_with = "lenient_string")]
    pub build_timeout_override: String,

    // =========================================================================
    // Client settings
    // =========================================================================
    #[serde(deserialize_with = "lenient_string")]
    pub region: String,
    #[serde(deserialize_with = "lenient_string")]
    pub proxy_host: String,
    #[serde(deserialize_with = "lenient_string")]
    pub proxy_port: String,

    /// `jenkins` when credentials come from a stored credentials reference.
    #[serde(deserialize_with = "lenient_string")]
    pub credentials_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub credentials_id: String,

    // =========================================================================
    // Source upload selectors
    // =========================================================================
    #[serde(deserialize_with = "lenient_string")]
    pub local_source_path: String,
    #[serde(deserialize_with = "lenient_string")]
    pub workspace_subdir: String,

    pub env_variables: Vec<EnvironmentVariable>,
}
