//! Shared fixtures for unit tests.

use crate::collaborators::ObjectStorage;
use crate::error::{GateError, Result};
use crate::snapshot::ConfigurationSnapshot;
use std::cell::RefCell;
use std::path::PathBuf;

/// A snapshot that passes every check: essential fields set, no overrides.
pub(crate) fn valid_snapshot() -> ConfigurationSnapshot {
    ConfigurationSnapshot {
        project_name: "my-project".to_string(),
        source_control_type: "project".to_string(),
        region: "us-east-1".to_string(),
        ..Default::default()
    }
}

/// Stand-in for a CI workspace handle; only its presence matters.
pub(crate) struct Workspace {
    #[allow(dead_code)]
    pub root: PathBuf,
}

impl Workspace {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// In-memory object storage that answers with a fixed versioning status.
pub(crate) struct FakeStorage {
    status: std::result::Result<String, String>,
    requested: RefCell<Vec<String>>,
}

impl FakeStorage {
    pub(crate) fn with_status(status: &str) -> Self {
        Self {
            status: Ok(status.to_string()),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn enabled() -> Self {
        Self::with_status("Enabled")
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            status: Err(message.to_string()),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Buckets queried so far, in call order.
    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl ObjectStorage for FakeStorage {
    fn bucket_versioning_status(&self, bucket: &str) -> Result<String> {
        self.requested.borrow_mut().push(bucket.to_string());
        self.status.clone().map_err(GateError::Collaborator)
    }
}
