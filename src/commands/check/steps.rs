//! Ordered preflight steps.
//!
//! The steps run in a fixed order and stop at the first failure: later steps
//! are reported as skipped, mirroring the validator's own first-match rule.

use buildgate::catalogue::{Rule, Severity};
use buildgate::config::{GateConfig, RestrictedEnvPolicy};
use buildgate::error::{GateError, InvalidInput};
use buildgate::snapshot::ConfigurationSnapshot;
use buildgate::validate::{
    RESTRICTED_ENV_PREFIX, Verdict, check_credentials_id_config, check_essential_config,
    check_jenkins_source_overrides, check_proxy_config, check_region_config,
    check_source_selectors, check_start_build_overrides_config, restricted_env_variable_names,
};
use serde::Serialize;

/// Status of a preflight step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pass,
    Fail,
    Skip,
}

/// Result of a single preflight step.
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    pub name: &'static str,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl StepResult {
    pub fn pass(name: &'static str) -> Self {
        Self {
            name,
            status: StepStatus::Pass,
            message: None,
            rule: None,
            severity: None,
        }
    }

    /// A passing step that still has something to report.
    pub fn pass_with_warning(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::pass(name)
        }
    }

    pub fn fail(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            status: StepStatus::Fail,
            message: Some(message.into()),
            rule: None,
            severity: Some(Severity::Recoverable),
        }
    }

    pub fn violation(name: &'static str, invalid: InvalidInput) -> Self {
        Self {
            name,
            status: StepStatus::Fail,
            message: Some(invalid.message().to_string()),
            rule: Some(invalid.rule),
            severity: Some(invalid.severity),
        }
    }

    pub fn skip(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            status: StepStatus::Skip,
            message: Some(message.into()),
            rule: None,
            severity: None,
        }
    }

    fn from_verdict(name: &'static str, verdict: Verdict) -> Self {
        match verdict {
            Verdict::Valid => Self::pass(name),
            Verdict::Invalid(invalid) => Self::violation(name, invalid),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == StepStatus::Fail
    }

    /// Convert a failed step into the error the command exits with.
    pub fn to_error(&self) -> Option<GateError> {
        if !self.is_failure() {
            return None;
        }
        let error = match self.rule {
            Some(rule) => GateError::InvalidInput(InvalidInput::new(rule)),
            None => GateError::ValidationError(self.message.clone().unwrap_or_default()),
        };
        Some(error)
    }
}

/// Names of every step, in run order.
pub const STEP_NAMES: [&str; 8] = [
    "essential",
    "overrides",
    "source_overrides",
    "source_upload",
    "environment",
    "region",
    "credentials",
    "proxy",
];

/// Message reported when a job-supplied source override is inconsistent.
pub const SOURCE_OVERRIDE_ERROR: &str =
    "Source override requires source type 'S3' together with a non-empty source location";

type Step = fn(&ConfigurationSnapshot, &GateConfig) -> StepResult;

const STEPS: [Step; 8] = [
    essential_step,
    overrides_step,
    source_overrides_step,
    source_upload_step,
    environment_step,
    region_step,
    credentials_step,
    proxy_step,
];

/// Run every step against a snapshot, stopping at the first failure.
pub fn run_steps(snapshot: &ConfigurationSnapshot, config: &GateConfig) -> Vec<StepResult> {
    let mut results = Vec::with_capacity(STEPS.len());
    let mut failed = false;

    for (step, name) in STEPS.iter().zip(STEP_NAMES) {
        if failed {
            results.push(StepResult::skip(name, "not run: an earlier step failed"));
            continue;
        }
        let result = step(snapshot, config);
        failed = result.is_failure();
        results.push(result);
    }

    results
}

fn essential_step(snapshot: &ConfigurationSnapshot, _config: &GateConfig) -> StepResult {
    StepResult::from_verdict("essential", check_essential_config(snapshot))
}

fn overrides_step(snapshot: &ConfigurationSnapshot, _config: &GateConfig) -> StepResult {
    StepResult::from_verdict("overrides", check_start_build_overrides_config(snapshot))
}

fn source_overrides_step(snapshot: &ConfigurationSnapshot, config: &GateConfig) -> StepResult {
    const NAME: &str = "source_overrides";

    if !config.check_source_overrides {
        return StepResult::skip(NAME, "disabled by config");
    }
    if !snapshot.uses_jenkins_source() {
        return StepResult::skip(NAME, "source is defined by the project");
    }
    if !snapshot.has_source_override() {
        return StepResult::skip(NAME, "no source override");
    }

    if check_jenkins_source_overrides(
        &snapshot.source_type_override,
        &snapshot.source_location_override,
    ) {
        StepResult::pass(NAME)
    } else {
        StepResult::fail(NAME, SOURCE_OVERRIDE_ERROR)
    }
}

fn source_upload_step(snapshot: &ConfigurationSnapshot, _config: &GateConfig) -> StepResult {
    const NAME: &str = "source_upload";

    if !snapshot.uses_jenkins_source() {
        return StepResult::skip(NAME, "source is defined by the project");
    }
    StepResult::from_verdict(
        NAME,
        check_source_selectors(&snapshot.local_source_path, &snapshot.workspace_subdir).into(),
    )
}

fn environment_step(snapshot: &ConfigurationSnapshot, config: &GateConfig) -> StepResult {
    const NAME: &str = "environment";

    if config.restricted_env_policy == RestrictedEnvPolicy::Ignore {
        return StepResult::skip(NAME, "disabled by config");
    }

    let restricted = restricted_env_variable_names(&snapshot.env_variables);
    if restricted.is_empty() {
        return StepResult::pass(NAME);
    }

    let message = format!(
        "environment variable names must not start with '{}': {}",
        RESTRICTED_ENV_PREFIX,
        restricted.join(", ")
    );

    match config.restricted_env_policy {
        RestrictedEnvPolicy::Warn => {
            tracing::warn!(names = ?restricted, "reserved environment variable names");
            StepResult::pass_with_warning(NAME, message)
        }
        _ => StepResult::fail(NAME, message),
    }
}

fn region_step(snapshot: &ConfigurationSnapshot, _config: &GateConfig) -> StepResult {
    StepResult::from_verdict("region", check_region_config(&snapshot.region).into())
}

fn credentials_step(snapshot: &ConfigurationSnapshot, _config: &GateConfig) -> StepResult {
    const NAME: &str = "credentials";

    if snapshot.credentials_type != "jenkins" {
        return StepResult::skip(NAME, "credentials are not a stored reference");
    }
    StepResult::from_verdict(NAME, check_credentials_id_config(&snapshot.credentials_id).into())
}

fn proxy_step(snapshot: &ConfigurationSnapshot, _config: &GateConfig) -> StepResult {
    StepResult::from_verdict(
        "proxy",
        check_proxy_config(&snapshot.proxy_host, &snapshot.proxy_port).into(),
    )
}
