//! Snapshot loading operations.

use super::model::ConfigurationSnapshot;
use crate::error::{GateError, Result};
use std::path::Path;

impl ConfigurationSnapshot {
    /// Load a snapshot from a file.
    ///
    /// Files ending in `.json` are parsed as JSON; anything else as YAML.
    /// Loading does not validate field values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GateError::UserError(format!(
                "failed to read snapshot file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse a snapshot from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| GateError::UserError(format!("failed to parse snapshot YAML: {}", e)))
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GateError::UserError(format!("failed to parse snapshot JSON: {}", e)))
    }

    /// Whether the source is uploaded by the CI job rather than defined by the project.
    pub fn uses_jenkins_source(&self) -> bool {
        self.source_control_type == "jenkins"
    }

    /// Whether either source override field is set.
    pub fn has_source_override(&self) -> bool {
        !self.source_type_override.is_empty() || !self.source_location_override.is_empty()
    }
}
