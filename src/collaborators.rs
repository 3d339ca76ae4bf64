//! Interfaces to external collaborators.
//!
//! The validator never talks to a remote service itself. The few checks that
//! need remote state receive a collaborator through these traits, and checks
//! that only need to know a handle exists take it as `Option<&T>`.

use crate::error::Result;

/// Versioning status reported for a bucket whose versioning is turned on.
pub const VERSIONING_ENABLED: &str = "Enabled";

/// Object storage client used for source uploads.
pub trait ObjectStorage {
    /// Fetch the versioning status of `bucket` (`Off`, `Enabled` or `Suspended`).
    ///
    /// One blocking call; latency and failure handling belong to the implementation.
    fn bucket_versioning_status(&self, bucket: &str) -> Result<String>;
}
