//! Config loading and validation.

use super::model::GateConfig;
use crate::error::{GateError, Result};
use std::path::Path;

impl GateConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(GateConfig)` - Successfully loaded and validated config
    /// * `Err(GateError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GateError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: GateConfig = if yaml.trim().is_empty() {
            GateConfig::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| GateError::UserError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `events_log`, when present, must be a non-empty path
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.events_log {
            if path.trim().is_empty() {
                return Err(GateError::UserError(
                    "config validation failed: events_log must be a non-empty path".to_string(),
                ));
            }
        }

        Ok(())
    }
}
