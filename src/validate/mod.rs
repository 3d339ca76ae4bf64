//! Validation of a build submission before it reaches the remote service.
//!
//! Two families of checks live here:
//! - Message checks (`check_essential_config`, `check_start_build_overrides_config`)
//!   return a [`Verdict`] whose `message()` is empty when valid.
//! - Precondition checks return a [`CheckResult`](crate::error::CheckResult) and are fatal for
//!   the current build attempt.
//!
//! All checks are synchronous and keep no state between calls.

pub mod client;
pub mod env;
pub mod essential;
pub mod overrides;
pub mod source;
pub mod verdict;

pub use client::{
    check_bucket_is_versioned, check_build_instance, check_cloud_watch_monitor_config,
    check_credentials_id_config, check_proxy_config, check_region_config,
};
pub use env::{
    RESTRICTED_ENV_PREFIX, env_variables_have_restricted_prefix, restricted_env_variable_names,
};
pub use essential::check_essential_config;
pub use overrides::{
    MAX_TIMEOUT_MINUTES, MIN_TIMEOUT_MINUTES, check_start_build_overrides_config,
    list_cache_modes, parse_timeout_minutes,
};
pub use source::{
    check_jenkins_source_overrides, check_s3_source_uploader_config, check_source_selectors,
    check_source_type_s3,
};
pub use verdict::Verdict;
