//! Tests for snapshot loading.

use crate::snapshot::{ConfigurationSnapshot, EnvironmentVariable};

#[test]
fn test_parse_empty_yaml() {
    let snapshot = ConfigurationSnapshot::from_yaml("").unwrap();
    assert_eq!(snapshot, ConfigurationSnapshot::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
project_name: my-project
source_control_type: project
compute_type_override: BUILD_GENERAL1_LARGE
"#;
    let snapshot = ConfigurationSnapshot::from_yaml(yaml).unwrap();

    assert_eq!(snapshot.project_name, "my-project");
    assert_eq!(snapshot.source_control_type, "project");
    assert_eq!(snapshot.compute_type_override, "BUILD_GENERAL1_LARGE");

    // Unspecified fields are empty
    assert!(snapshot.artifact_type_override.is_empty());
    assert!(snapshot.env_variables.is_empty());
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
project_name: my-project
privileged_mode_override: true
report_build_status:
  nested: true
"#;
    let snapshot = ConfigurationSnapshot::from_yaml(yaml).unwrap();
    assert_eq!(snapshot.project_name, "my-project");
}

#[test]
fn test_parse_env_variables() {
    let yaml = r#"
env_variables:
  - name: MY_VAR
    value: "1"
  - name: CODEBUILD_FOO
"#;
    let snapshot = ConfigurationSnapshot::from_yaml(yaml).unwrap();
    assert_eq!(
        snapshot.env_variables,
        vec![
            EnvironmentVariable::new("MY_VAR", "1"),
            EnvironmentVariable::new("CODEBUILD_FOO", ""),
        ]
    );
}

#[test]
fn test_timeout_is_kept_as_entered() {
    // Range checks belong to the validator, not the loader.
    let snapshot = ConfigurationSnapshot::from_yaml("build_timeout_override: \"60\"").unwrap();
    assert_eq!(snapshot.build_timeout_override, "60");
}

#[test]
fn test_parse_invalid_yaml() {
    let result = ConfigurationSnapshot::from_yaml("project_name: [unclosed");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to parse snapshot YAML"));
}

#[test]
fn test_parse_json() {
    let json = r#"{"project_name": "p", "source_control_type": "jenkins", "region": "us-west-2"}"#;
    let snapshot = ConfigurationSnapshot::from_json(json).unwrap();
    assert_eq!(snapshot.project_name, "p");
    assert!(snapshot.uses_jenkins_source());
    assert_eq!(snapshot.region, "us-west-2");
}

#[test]
fn test_load_picks_format_by_extension() {
    use std::io::Write;

    let dir = tempfile::TempDir::new().unwrap();

    let json_path = dir.path().join("snapshot.json");
    std::fs::write(&json_path, r#"{"project_name": "from-json"}"#).unwrap();
    assert_eq!(
        ConfigurationSnapshot::load(&json_path).unwrap().project_name,
        "from-json"
    );

    let yaml_path = dir.path().join("snapshot.yaml");
    let mut file = std::fs::File::create(&yaml_path).unwrap();
    writeln!(file, "project_name: from-yaml").unwrap();
    assert_eq!(
        ConfigurationSnapshot::load(&yaml_path).unwrap().project_name,
        "from-yaml"
    );
}

#[test]
fn test_load_missing_file() {
    let result = ConfigurationSnapshot::load("/nonexistent/path/snapshot.yaml");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to read snapshot file"));
}

#[test]
fn test_has_source_override() {
    let mut snapshot = ConfigurationSnapshot::default();
    assert!(!snapshot.has_source_override());

    snapshot.source_location_override = "bucket/key.zip".to_string();
    assert!(snapshot.has_source_override());
}

#[test]
fn test_yaml_null_means_no_override() {
    let yaml = r#"
artifact_type_override: null
compute_type_override: ~
region:
"#;
    let snapshot = ConfigurationSnapshot::from_yaml(yaml).unwrap();
    assert_eq!(snapshot.artifact_type_override, "");
    assert_eq!(snapshot.compute_type_override, "");
    assert_eq!(snapshot.region, "");
}

#[test]
fn test_json_null_means_no_override() {
    let snapshot = ConfigurationSnapshot::from_json(r#"{"cache_type_override": null}"#).unwrap();
    assert_eq!(snapshot.cache_type_override, "");
}

#[test]
fn test_unquoted_cache_modes_list() {
    let yaml = r#"
cache_modes_override: [LOCAL_SOURCE_CACHE, LOCAL_CUSTOM_CACHE]
"#;
    let snapshot = ConfigurationSnapshot::from_yaml(yaml).unwrap();
    assert_eq!(
        snapshot.cache_modes_override,
        "[LOCAL_SOURCE_CACHE,LOCAL_CUSTOM_CACHE]"
    );
}

#[test]
fn test_quoted_cache_modes_kept_as_entered() {
    let yaml = r#"cache_modes_override: "[LOCAL_SOURCE_CACHE, LOCAL_CUSTOM_CACHE]""#;
    let snapshot = ConfigurationSnapshot::from_yaml(yaml).unwrap();
    assert_eq!(
        snapshot.cache_modes_override,
        "[LOCAL_SOURCE_CACHE, LOCAL_CUSTOM_CACHE]"
    );
}

#[test]
fn test_unquoted_number_keeps_its_text() {
    let snapshot = ConfigurationSnapshot::from_yaml("build_timeout_override: 60").unwrap();
    assert_eq!(snapshot.build_timeout_override, "60");
}

#[test]
fn test_nested_list_is_rejected() {
    let err = ConfigurationSnapshot::from_yaml("cache_modes_override: [[LOCAL_SOURCE_CACHE]]")
        .unwrap_err();
    assert!(err.to_string().contains("quote the whole value"));
}

#[test]
fn test_loaded_lists_pass_the_override_checks() {
    use crate::validate::check_start_build_overrides_config;

    let yaml = r#"
artifact_type_override: ~
cache_modes_override: [LOCAL_SOURCE_CACHE]
build_timeout_override: 60
"#;
    let snapshot = ConfigurationSnapshot::from_yaml(yaml).unwrap();
    assert!(check_start_build_overrides_config(&snapshot).is_valid());
}
