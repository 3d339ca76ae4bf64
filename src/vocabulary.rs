//! Closed vocabularies accepted by the remote build service.
//!
//! Each vocabulary is an enum whose variants map one-to-one onto the exact,
//! case-sensitive strings the service accepts. Lookups return `Option` rather
//! than failing, so membership is a plain test.

use serde::Serialize;

/// A closed, case-sensitive set of accepted string values.
pub trait Vocabulary: Sized + Copy + 'static {
    /// Human-readable name of the vocabulary (used by `buildgate vocab`).
    const NAME: &'static str;

    /// Every accepted value, in service order.
    const VALUES: &'static [&'static str];

    /// Map a string to a member of the vocabulary.
    fn from_value(value: &str) -> Option<Self>;

    /// The service string for this member.
    fn as_str(&self) -> &'static str;

    /// Whether `value` names a member of the vocabulary.
    fn accepts(value: &str) -> bool {
        Self::from_value(value).is_some()
    }
}

macro_rules! closed_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl Vocabulary for $name {
            const NAME: &'static str = $label;
            const VALUES: &'static [&'static str] = &[$($value),+];

            fn from_value(value: &str) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_vocabulary! {
    /// Artifact type. An empty override is also accepted and means "service default".
    ArtifactsType, "artifact type" {
        NoArtifacts => "NO_ARTIFACTS",
        S3 => "S3",
    }
}

closed_vocabulary! {
    /// Artifact packaging.
    ArtifactPackaging, "artifact packaging" {
        None => "NONE",
        Zip => "ZIP",
    }
}

closed_vocabulary! {
    /// Artifact namespace.
    ArtifactNamespace, "artifact namespace" {
        None => "NONE",
        BuildId => "BUILD_ID",
    }
}

closed_vocabulary! {
    /// Source repository type.
    SourceType, "source type" {
        CodeCommit => "CODECOMMIT",
        S3 => "S3",
        GitHub => "GITHUB",
        GitHubEnterprise => "GITHUB_ENTERPRISE",
        Bitbucket => "BITBUCKET",
    }
}

closed_vocabulary! {
    /// Build compute type.
    ComputeType, "compute type" {
        BuildGeneral1Small => "BUILD_GENERAL1_SMALL",
        BuildGeneral1Medium => "BUILD_GENERAL1_MEDIUM",
        BuildGeneral1Large => "BUILD_GENERAL1_LARGE",
    }
}

closed_vocabulary! {
    /// Build environment type.
    EnvironmentType, "environment type" {
        LinuxContainer => "LINUX_CONTAINER",
        WindowsContainer => "WINDOWS_CONTAINER",
    }
}

closed_vocabulary! {
    /// Build cache type.
    CacheType, "cache type" {
        S3 => "S3",
        NoCache => "NO_CACHE",
        Local => "LOCAL",
    }
}

closed_vocabulary! {
    /// Local cache mode. Used as a token inside the cache modes list.
    CacheMode, "cache mode" {
        LocalSourceCache => "LOCAL_SOURCE_CACHE",
        LocalDockerLayerCache => "LOCAL_DOCKER_LAYER_CACHE",
        LocalCustomCache => "LOCAL_CUSTOM_CACHE",
    }
}

closed_vocabulary! {
    /// Status of a logs destination (CloudWatch Logs or S3 logs).
    LogsConfigStatusType, "logs status" {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

closed_vocabulary! {
    /// Where the build source comes from: uploaded by the CI job, or defined by the project.
    SourceControlType, "source control type" {
        Jenkins => "jenkins",
        Project => "project",
    }
}

/// A named vocabulary and its values, for listing.
#[derive(Debug, Clone, Serialize)]
pub struct VocabularyListing {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

fn listing<V: Vocabulary>() -> VocabularyListing {
    VocabularyListing {
        name: V::NAME,
        values: V::VALUES,
    }
}

/// Every vocabulary the validator checks against.
pub fn all_vocabularies() -> Vec<VocabularyListing> {
    vec![
        listing::<ArtifactsType>(),
        listing::<ArtifactPackaging>(),
        listing::<ArtifactNamespace>(),
        listing::<SourceType>(),
        listing::<ComputeType>(),
        listing::<EnvironmentType>(),
        listing::<CacheType>(),
        listing::<CacheMode>(),
        listing::<LogsConfigStatusType>(),
        listing::<SourceControlType>(),
    ]
}
