//! Essential configuration check.

use crate::catalogue::Rule;
use crate::snapshot::ConfigurationSnapshot;
use crate::vocabulary::{SourceControlType, Vocabulary};

use super::verdict::Verdict;

/// Check the fields without which no other validation is meaningful.
///
/// Run this before any other check:
/// 1. `project_name` must be non-empty
/// 2. `source_control_type` must be exactly `jenkins` or `project`
pub fn check_essential_config(snapshot: &ConfigurationSnapshot) -> Verdict {
    if snapshot.project_name.is_empty() {
        tracing::debug!(rule = %Rule::ProjectRequired, "essential config rejected");
        return Verdict::invalid(Rule::ProjectRequired);
    }

    if !SourceControlType::accepts(&snapshot.source_control_type) {
        tracing::debug!(
            rule = %Rule::SourceControlTypeRequired,
            value = %snapshot.source_control_type,
            "essential config rejected"
        );
        return Verdict::invalid(Rule::SourceControlTypeRequired);
    }

    Verdict::Valid
}
