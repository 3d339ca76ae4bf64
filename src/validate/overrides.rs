//! Start-build override checks.
//!
//! Each override is optional: an empty value means "use the default" and is
//! never an error. A non-empty value must belong to its field's closed
//! vocabulary (or, for the timeout, fall within the accepted range). Fields
//! are checked in a fixed order and the first failure wins.

use crate::catalogue::Rule;
use crate::snapshot::ConfigurationSnapshot;
use crate::vocabulary::{
    ArtifactNamespace, ArtifactPackaging, ArtifactsType, CacheMode, CacheType, ComputeType,
    EnvironmentType, LogsConfigStatusType, SourceType, Vocabulary,
};
use regex::Regex;
use std::sync::LazyLock;

use super::verdict::Verdict;

/// Minimum accepted build timeout, in minutes.
pub const MIN_TIMEOUT_MINUTES: i32 = 5;

/// Maximum accepted build timeout, in minutes.
pub const MAX_TIMEOUT_MINUTES: i32 = 480;

static CACHE_MODES_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.*)\]$").expect("cache modes pattern is valid"));

/// One entry of the ordered override pipeline.
struct OverrideCheck {
    rule: Rule,
    value: fn(&ConfigurationSnapshot) -> &str,
    accepts: fn(&str) -> bool,
}

const OVERRIDE_CHECKS: [OverrideCheck; 11] = [
    OverrideCheck {
        rule: Rule::ArtifactType,
        value: artifact_type_override,
        accepts: ArtifactsType::accepts,
    },
    OverrideCheck {
        rule: Rule::ArtifactPackaging,
        value: artifact_packaging_override,
        accepts: ArtifactPackaging::accepts,
    },
    OverrideCheck {
        rule: Rule::ArtifactNamespace,
        value: artifact_namespace_override,
        accepts: ArtifactNamespace::accepts,
    },
    OverrideCheck {
        rule: Rule::SourceType,
        value: source_type_override,
        accepts: SourceType::accepts,
    },
    OverrideCheck {
        rule: Rule::ComputeType,
        value: compute_type_override,
        accepts: ComputeType::accepts,
    },
    OverrideCheck {
        rule: Rule::EnvironmentType,
        value: environment_type_override,
        accepts: EnvironmentType::accepts,
    },
    OverrideCheck {
        rule: Rule::CacheType,
        value: cache_type_override,
        accepts: CacheType::accepts,
    },
    OverrideCheck {
        rule: Rule::CacheModes,
        value: cache_modes_override,
        accepts: cache_modes_valid,
    },
    OverrideCheck {
        rule: Rule::CloudWatchLogsStatus,
        value: cloud_watch_logs_status_override,
        accepts: LogsConfigStatusType::accepts,
    },
    OverrideCheck {
        rule: Rule::S3LogsStatus,
        value: s3_logs_status_override,
        accepts: LogsConfigStatusType::accepts,
    },
    OverrideCheck {
        rule: Rule::TimeoutOverride,
        value: build_timeout_override,
        accepts: timeout_valid,
    },
];

// Field accessors for the pipeline table.
fn artifact_type_override(snapshot: &ConfigurationSnapshot) -> &str {
    &snapshot.artifact_type_override
}

fn artifact_packaging_override(snapshot: &ConfigurationSnapshot) -> &str {
    &snapshot.artifact_packaging_override
}

fn artifact_namespace_override(snapshot: &ConfigurationSnapshot) -> &str {
    &snapshot.artifact_namespace_override
}

fn source_type_override(snapshot: &ConfigurationSnapshot) -> &str {
    &snapshot.source_type_override
}

fn compute_type_override(snapshot: &ConfigurationSnapshot) -> &str {
    &snapshot.compute_type_override
}

fn environment_type_override(snapshot: &ConfigurationSnapshot) -> &str {
    &snapshot.environment_type_override
}

fn cache_type_override(snapshot: &ConfigurationSnapshot) -> &str {
    &snapshot.cache_type_override
}

fn cache_modes_override(snapshot: &ConfigurationSnapshot) -> &str {
    &snapshot.cache_modes_override
}

fn cloud_watch_logs_status_override(snapshot: &ConfigurationSnapshot) -> &str {
    &snapshot.cloud_watch_logs_status_override
}

fn s3_logs_status_override(snapshot: &ConfigurationSnapshot) -> &str {
    &snapshot.s3_logs_status_override
}

fn build_timeout_override(snapshot: &ConfigurationSnapshot) -> &str {
    &snapshot.build_timeout_override
}

/// Check every start-build override field.
///
/// Order: artifact type, artifact packaging, artifact namespace, source type,
/// compute type, environment type, cache type, cache modes, CloudWatch Logs
/// status, S3 logs status, build timeout. Returns on the first violation;
/// later fields are not examined.
pub fn check_start_build_overrides_config(snapshot: &ConfigurationSnapshot) -> Verdict {
    for check in &OVERRIDE_CHECKS {
        let value = (check.value)(snapshot);
        if value.is_empty() {
            continue;
        }
        if !(check.accepts)(value) {
            tracing::debug!(rule = %check.rule, value, "override rejected");
            return Verdict::invalid(check.rule);
        }
    }

    Verdict::Valid
}

/// Split a cache modes override into its tokens.
///
/// The value must be enclosed in brackets with comma-separated tokens, e.g.
/// `[LOCAL_SOURCE_CACHE, LOCAL_CUSTOM_CACHE]`. Whitespace around tokens is
/// trimmed. Returns `None` when the brackets are missing or any token is
/// empty (which includes `[]`).
pub fn list_cache_modes(value: &str) -> Option<Vec<&str>> {
    let inner = CACHE_MODES_LIST.captures(value.trim())?.get(1)?.as_str();

    let tokens: Vec<&str> = inner.split(',').map(str::trim).collect();
    if tokens.iter().any(|token| token.is_empty()) {
        return None;
    }
    Some(tokens)
}

fn cache_modes_valid(value: &str) -> bool {
    list_cache_modes(value)
        .is_some_and(|modes| modes.iter().all(|mode| CacheMode::accepts(mode)))
}

/// Parse a timeout override as base-10 minutes within the accepted range.
pub fn parse_timeout_minutes(value: &str) -> Option<i32> {
    value
        .parse::<i32>()
        .ok()
        .filter(|minutes| (MIN_TIMEOUT_MINUTES..=MAX_TIMEOUT_MINUTES).contains(minutes))
}

fn timeout_valid(value: &str) -> bool {
    parse_timeout_minutes(value).is_some()
}

#[cfg(test)]
mod tests;
