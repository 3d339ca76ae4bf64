//! Source upload precondition checks.

use crate::catalogue::Rule;
use crate::collaborators::ObjectStorage;
use crate::error::{CheckResult, InvalidInput};
use crate::vocabulary::{SourceType, Vocabulary};

/// Check the collaborators and selectors needed to upload source to object storage.
///
/// Fails (fatally) when the workspace handle or storage client is absent, or
/// when both `local_source_path` and `workspace_subdir` are set: the two are
/// mutually exclusive selectors for what gets uploaded.
pub fn check_s3_source_uploader_config<W, S>(
    workspace: Option<&W>,
    storage: Option<&S>,
    local_source_path: &str,
    workspace_subdir: &str,
) -> CheckResult
where
    W: ?Sized,
    S: ObjectStorage + ?Sized,
{
    if workspace.is_none() {
        return Err(InvalidInput::new(Rule::SourceUploaderNullWorkspace));
    }

    if storage.is_none() {
        return Err(InvalidInput::new(Rule::SourceUploaderNullS3Client));
    }

    check_source_selectors(local_source_path, workspace_subdir)
}

/// Fails when both `local_source_path` and `workspace_subdir` are set.
pub fn check_source_selectors(local_source_path: &str, workspace_subdir: &str) -> CheckResult {
    if !local_source_path.is_empty() && !workspace_subdir.is_empty() {
        tracing::debug!(
            local_source_path,
            workspace_subdir,
            "both source selectors specified"
        );
        return Err(InvalidInput::new(Rule::SourceUploaderConfig));
    }

    Ok(())
}

/// Whether a source type denotes object-storage backed source.
pub fn check_source_type_s3(source_type: &str) -> bool {
    source_type == SourceType::S3.as_str()
}

/// Check that a job-supplied source override is consistent.
///
/// Type and location must be both set or both empty, and the override is only
/// accepted when the type is `S3`. Both empty therefore also yields `false`.
pub fn check_jenkins_source_overrides(
    source_type_override: &str,
    source_location_override: &str,
) -> bool {
    if source_type_override.is_empty() != source_location_override.is_empty() {
        return false;
    }

    check_source_type_s3(source_type_override)
}
