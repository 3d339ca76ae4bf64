//! The message catalogue.
//!
//! Every user-facing validation message lives here, keyed by [`Rule`]. The
//! literal text is a contract: callers and UI surfaces match on it exactly, so
//! changing a message is a breaking change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a caller must react to a violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// User configuration error in an override field; the build submission is
    /// refused but the caller can report and continue.
    Recoverable,
    /// Wiring error or missing required setting; abort the current operation.
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Recoverable => "recoverable",
            Severity::Fatal => "fatal",
        };
        f.pad(label)
    }
}

/// A validation rule with a fixed catalogue message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    ArtifactType,
    ArtifactPackaging,
    ArtifactNamespace,
    TimeoutOverride,
    RegionInvalid,
    ProxyInvalid,
    CredentialsIdInvalid,
    SourceType,
    ComputeType,
    EnvironmentType,
    CacheType,
    CacheModes,
    CloudWatchLogsStatus,
    S3LogsStatus,
    SourceUploaderNullWorkspace,
    SourceUploaderNullS3Client,
    SourceUploaderConfig,
    ProjectRequired,
    SourceControlTypeRequired,
    BuildInstanceRequired,
}

impl Rule {
    /// Every rule in catalogue order.
    pub const ALL: [Rule; 20] = [
        Rule::ArtifactType,
        Rule::ArtifactPackaging,
        Rule::ArtifactNamespace,
        Rule::TimeoutOverride,
        Rule::RegionInvalid,
        Rule::ProxyInvalid,
        Rule::CredentialsIdInvalid,
        Rule::SourceType,
        Rule::ComputeType,
        Rule::EnvironmentType,
        Rule::CacheType,
        Rule::CacheModes,
        Rule::CloudWatchLogsStatus,
        Rule::S3LogsStatus,
        Rule::SourceUploaderNullWorkspace,
        Rule::SourceUploaderNullS3Client,
        Rule::SourceUploaderConfig,
        Rule::ProjectRequired,
        Rule::SourceControlTypeRequired,
        Rule::BuildInstanceRequired,
    ];

    /// Stable identifier for the rule (matches its serde representation).
    pub fn id(&self) -> &'static str {
        match self {
            Rule::ArtifactType => "artifact_type",
            Rule::ArtifactPackaging => "artifact_packaging",
            Rule::ArtifactNamespace => "artifact_namespace",
            Rule::TimeoutOverride => "timeout_override",
            Rule::RegionInvalid => "region_invalid",
            Rule::ProxyInvalid => "proxy_invalid",
            Rule::CredentialsIdInvalid => "credentials_id_invalid",
            Rule::SourceType => "source_type",
            Rule::ComputeType => "compute_type",
            Rule::EnvironmentType => "environment_type",
            Rule::CacheType => "cache_type",
            Rule::CacheModes => "cache_modes",
            Rule::CloudWatchLogsStatus => "cloud_watch_logs_status",
            Rule::S3LogsStatus => "s3_logs_status",
            Rule::SourceUploaderNullWorkspace => "source_uploader_null_workspace",
            Rule::SourceUploaderNullS3Client => "source_uploader_null_s3_client",
            Rule::SourceUploaderConfig => "source_uploader_config",
            Rule::ProjectRequired => "project_required",
            Rule::SourceControlTypeRequired => "source_control_type_required",
            Rule::BuildInstanceRequired => "build_instance_required",
        }
    }

    /// The literal user-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Rule::ArtifactType => "Artifact type override must be one of 'NO_ARTIFACTS', 'S3', ''",
            Rule::ArtifactPackaging => {
                "Artifact packaging override must be one of 'NONE', 'ZIP', ''"
            }
            Rule::ArtifactNamespace => {
                "Artifact namespace override must be one of 'NONE', 'BUILD_ID', ''"
            }
            Rule::TimeoutOverride => {
                "Build timeout override must be a number between 5 and 480 (minutes)"
            }
            Rule::RegionInvalid => "Enter a valid AWS region",
            Rule::ProxyInvalid => "Enter a valid proxy host and port (greater than zero)",
            Rule::CredentialsIdInvalid => {
                "Invalid credentials ID. Verify that the credentials are of type CodeBuildCredentials and are accessible in this project."
            }
            Rule::SourceType => {
                "Source type override must be one of 'CODECOMMIT', 'S3', 'GITHUB', 'GITHUB_ENTERPRISE', 'BITBUCKET'"
            }
            Rule::ComputeType => {
                "Compute type override must be one of 'BUILD_GENERAL1_SMALL', 'BUILD_GENERAL1_MEDIUM', 'BUILD_GENERAL1_LARGE'"
            }
            Rule::EnvironmentType => {
                "Environment type override must be one of 'LINUX_CONTAINER', 'WINDOWS_CONTAINER'"
            }
            Rule::CacheType => "Cache type override must be one of 'S3', 'NO_CACHE', 'LOCAL'",
            Rule::CacheModes => {
                "Cache modes override must be one or more of 'LOCAL_SOURCE_CACHE', 'LOCAL_DOCKER_LAYER_CACHE', 'LOCAL_CUSTOM_CACHE' and enclosed in brackets"
            }
            Rule::CloudWatchLogsStatus => {
                "CloudWatch Logs status override must be one of 'ENABLED', 'DISABLED'"
            }
            Rule::S3LogsStatus => "S3 logs status override must be one of 'ENABLED', 'DISABLED'",
            Rule::SourceUploaderNullWorkspace => "Project workspace is null",
            Rule::SourceUploaderNullS3Client => "S3 client cannot be null",
            Rule::SourceUploaderConfig => "Cannot specify both localSourcePath and workspaceSubdir",
            Rule::ProjectRequired => "CodeBuild project name is required",
            Rule::SourceControlTypeRequired => {
                "Source control type is required and must be 'jenkins' or 'project'"
            }
            Rule::BuildInstanceRequired => "Build instance is required",
        }
    }

    /// Severity of a violation of this rule.
    ///
    /// Essential and override rules are recoverable; preconditions on
    /// collaborators and client settings are fatal.
    pub fn severity(&self) -> Severity {
        match self {
            Rule::RegionInvalid
            | Rule::ProxyInvalid
            | Rule::CredentialsIdInvalid
            | Rule::SourceUploaderNullWorkspace
            | Rule::SourceUploaderNullS3Client
            | Rule::SourceUploaderConfig
            | Rule::BuildInstanceRequired => Severity::Fatal,
            _ => Severity::Recoverable,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}
