//! Tests for start-build override checks.

use super::*;
use crate::test_support::valid_snapshot;

/// Set a named override field on a snapshot.
fn set_field(snapshot: &mut ConfigurationSnapshot, field: &str, value: &str) {
    let slot = match field {
        "artifact_type" => &mut snapshot.artifact_type_override,
        "artifact_packaging" => &mut snapshot.artifact_packaging_override,
        "artifact_namespace" => &mut snapshot.artifact_namespace_override,
        "source_type" => &mut snapshot.source_type_override,
        "compute_type" => &mut snapshot.compute_type_override,
        "environment_type" => &mut snapshot.environment_type_override,
        "cache_type" => &mut snapshot.cache_type_override,
        "cloud_watch_logs_status" => &mut snapshot.cloud_watch_logs_status_override,
        "s3_logs_status" => &mut snapshot.s3_logs_status_override,
        other => panic!("unknown field {}", other),
    };
    *slot = value.to_string();
}

/// Every enumerated field with its accepted values and rule.
fn enumerated_fields() -> Vec<(&'static str, &'static [&'static str], Rule)> {
    vec![
        ("artifact_type", ArtifactsType::VALUES, Rule::ArtifactType),
        ("artifact_packaging", ArtifactPackaging::VALUES, Rule::ArtifactPackaging),
        ("artifact_namespace", ArtifactNamespace::VALUES, Rule::ArtifactNamespace),
        ("source_type", SourceType::VALUES, Rule::SourceType),
        ("compute_type", ComputeType::VALUES, Rule::ComputeType),
        ("environment_type", EnvironmentType::VALUES, Rule::EnvironmentType),
        ("cache_type", CacheType::VALUES, Rule::CacheType),
        (
            "cloud_watch_logs_status",
            LogsConfigStatusType::VALUES,
            Rule::CloudWatchLogsStatus,
        ),
        ("s3_logs_status", LogsConfigStatusType::VALUES, Rule::S3LogsStatus),
    ]
}

#[test]
fn test_no_overrides_is_valid() {
    let verdict = check_start_build_overrides_config(&ConfigurationSnapshot::default());
    assert_eq!(verdict, Verdict::Valid);
    assert_eq!(verdict.message(), "");
}

#[test]
fn test_allowed_values_pass() {
    for (field, values, rule) in enumerated_fields() {
        for value in values {
            let mut snapshot = valid_snapshot();
            set_field(&mut snapshot, field, value);
            assert!(
                check_start_build_overrides_config(&snapshot).is_valid(),
                "{} should accept '{}'",
                rule,
                value
            );
        }
    }
}

#[test]
fn test_empty_value_is_skipped() {
    for (field, _, _) in enumerated_fields() {
        let mut snapshot = valid_snapshot();
        set_field(&mut snapshot, field, "");
        assert!(check_start_build_overrides_config(&snapshot).is_valid());
    }
}

#[test]
fn test_unknown_value_fails_with_field_message() {
    for (field, _, rule) in enumerated_fields() {
        for bad in ["BOGUS", "s3", "enabled", " NONE"] {
            let mut snapshot = valid_snapshot();
            set_field(&mut snapshot, field, bad);
            let verdict = check_start_build_overrides_config(&snapshot);
            assert_eq!(verdict.rule(), Some(rule), "value '{}'", bad);
            assert_eq!(verdict.message(), rule.message());
        }
    }
}

#[test]
fn test_artifact_type_message() {
    let mut snapshot = valid_snapshot();
    snapshot.artifact_type_override = "CODEPIPELINE".to_string();
    assert_eq!(
        check_start_build_overrides_config(&snapshot).message(),
        "Artifact type override must be one of 'NO_ARTIFACTS', 'S3', ''"
    );
}

#[test]
fn test_first_failing_field_wins() {
    let mut snapshot = valid_snapshot();
    snapshot.artifact_type_override = "BOGUS".to_string();
    snapshot.source_type_override = "BOGUS".to_string();

    let verdict = check_start_build_overrides_config(&snapshot);
    assert_eq!(verdict.rule(), Some(Rule::ArtifactType));
}

#[test]
fn test_later_fields_not_reported_when_earlier_fails() {
    let mut snapshot = valid_snapshot();
    snapshot.compute_type_override = "BUILD_GENERAL1_HUGE".to_string();
    snapshot.build_timeout_override = "9999".to_string();

    assert_eq!(
        check_start_build_overrides_config(&snapshot).rule(),
        Some(Rule::ComputeType)
    );
}

#[test]
fn test_logs_status_fields_are_independent() {
    let mut snapshot = valid_snapshot();
    snapshot.cloud_watch_logs_status_override = "ENABLED".to_string();
    snapshot.s3_logs_status_override = "ON".to_string();

    assert_eq!(
        check_start_build_overrides_config(&snapshot).rule(),
        Some(Rule::S3LogsStatus)
    );
}

// ============================================================================
// Timeout
// ============================================================================

#[test]
fn test_timeout_boundaries() {
    for (value, ok) in [("5", true), ("480", true), ("60", true), ("4", false), ("481", false)] {
        let mut snapshot = valid_snapshot();
        snapshot.build_timeout_override = value.to_string();
        let verdict = check_start_build_overrides_config(&snapshot);
        assert_eq!(verdict.is_valid(), ok, "timeout '{}'", value);
    }
}

#[test]
fn test_timeout_non_numeric_uses_range_message() {
    for value in ["abc", "5.5", " 60", "60m", "99999999999"] {
        let mut snapshot = valid_snapshot();
        snapshot.build_timeout_override = value.to_string();
        let verdict = check_start_build_overrides_config(&snapshot);
        assert_eq!(
            verdict.message(),
            "Build timeout override must be a number between 5 and 480 (minutes)",
            "timeout '{}'",
            value
        );
    }
}

#[test]
fn test_timeout_negative_is_out_of_range() {
    assert_eq!(parse_timeout_minutes("-10"), None);
    assert_eq!(parse_timeout_minutes("0"), None);
    assert_eq!(parse_timeout_minutes("+30"), Some(30));
}

// ============================================================================
// Cache modes
// ============================================================================

#[test]
fn test_cache_modes_valid_list() {
    let mut snapshot = valid_snapshot();
    snapshot.cache_modes_override = "[LOCAL_SOURCE_CACHE,LOCAL_DOCKER_LAYER_CACHE]".to_string();
    assert!(check_start_build_overrides_config(&snapshot).is_valid());
}

#[test]
fn test_cache_modes_unknown_token() {
    let mut snapshot = valid_snapshot();
    snapshot.cache_modes_override = "[LOCAL_SOURCE_CACHE,BOGUS]".to_string();
    assert_eq!(
        check_start_build_overrides_config(&snapshot).rule(),
        Some(Rule::CacheModes)
    );
}

#[test]
fn test_cache_modes_missing_brackets() {
    for value in [
        "LOCAL_SOURCE_CACHE",
        "LOCAL_SOURCE_CACHE,LOCAL_CUSTOM_CACHE",
        "[LOCAL_SOURCE_CACHE",
        "LOCAL_SOURCE_CACHE]",
    ] {
        let mut snapshot = valid_snapshot();
        snapshot.cache_modes_override = value.to_string();
        assert_eq!(
            check_start_build_overrides_config(&snapshot).message(),
            Rule::CacheModes.message(),
            "cache modes '{}'",
            value
        );
    }
}

#[test]
fn test_list_cache_modes_trims_tokens() {
    assert_eq!(
        list_cache_modes(" [ LOCAL_SOURCE_CACHE , LOCAL_CUSTOM_CACHE ] "),
        Some(vec!["LOCAL_SOURCE_CACHE", "LOCAL_CUSTOM_CACHE"])
    );
    assert_eq!(
        list_cache_modes("[LOCAL_CUSTOM_CACHE]"),
        Some(vec!["LOCAL_CUSTOM_CACHE"])
    );
}

#[test]
fn test_list_cache_modes_rejects_empty_tokens() {
    assert_eq!(list_cache_modes("[]"), None);
    assert_eq!(list_cache_modes("[LOCAL_SOURCE_CACHE,]"), None);
    assert_eq!(list_cache_modes("[,LOCAL_SOURCE_CACHE]"), None);
}

#[test]
fn test_cache_modes_checked_after_cache_type() {
    let mut snapshot = valid_snapshot();
    snapshot.cache_type_override = "REMOTE".to_string();
    snapshot.cache_modes_override = "nonsense".to_string();
    assert_eq!(
        check_start_build_overrides_config(&snapshot).rule(),
        Some(Rule::CacheType)
    );
}
