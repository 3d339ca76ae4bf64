//! Environment variable checks.

use crate::snapshot::EnvironmentVariable;

/// Name prefix reserved by the build service for its own variables.
pub const RESTRICTED_ENV_PREFIX: &str = "CODEBUILD_";

/// Whether any variable name collides with the service's reserved prefix.
pub fn env_variables_have_restricted_prefix<'a, I>(env_variables: I) -> bool
where
    I: IntoIterator<Item = &'a EnvironmentVariable>,
{
    env_variables
        .into_iter()
        .any(|var| var.name.starts_with(RESTRICTED_ENV_PREFIX))
}

/// Names of the variables that use the reserved prefix.
pub fn restricted_env_variable_names(env_variables: &[EnvironmentVariable]) -> Vec<&str> {
    env_variables
        .iter()
        .filter(|var| var.name.starts_with(RESTRICTED_ENV_PREFIX))
        .map(|var| var.name.as_str())
        .collect()
}
