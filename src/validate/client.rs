//! Client factory and collaborator checks.

use crate::catalogue::Rule;
use crate::collaborators::{ObjectStorage, VERSIONING_ENABLED};
use crate::error::{CheckResult, InvalidInput, Result};

/// Fails when the stored credentials reference is empty.
pub fn check_credentials_id_config(credentials_id: &str) -> CheckResult {
    if credentials_id.is_empty() {
        return Err(InvalidInput::new(Rule::CredentialsIdInvalid));
    }
    Ok(())
}

/// Fails when no region is configured.
pub fn check_region_config(region: &str) -> CheckResult {
    if region.is_empty() {
        return Err(InvalidInput::new(Rule::RegionInvalid));
    }
    Ok(())
}

/// Check an optional proxy endpoint.
///
/// An empty host means no proxy. Otherwise the port must be an integer in
/// `1..=65535`.
pub fn check_proxy_config(host: &str, port: &str) -> CheckResult {
    if host.is_empty() {
        return Ok(());
    }

    match port.parse::<u16>() {
        Ok(port) if port > 0 => Ok(()),
        _ => {
            tracing::debug!(host, port, "proxy port rejected");
            Err(InvalidInput::new(Rule::ProxyInvalid))
        }
    }
}

/// Fails when there is no build handle to operate on.
pub fn check_build_instance<B: ?Sized>(build: Option<&B>) -> CheckResult {
    match build {
        Some(_) => Ok(()),
        None => Err(InvalidInput::new(Rule::BuildInstanceRequired)),
    }
}

/// Whether a logs client handle is present.
pub fn check_cloud_watch_monitor_config<L: ?Sized>(client: Option<&L>) -> bool {
    client.is_some()
}

/// Whether `bucket` has versioning enabled, according to the storage collaborator.
///
/// The answer reflects remote state at call time. Errors from the collaborator
/// are returned unchanged.
pub fn check_bucket_is_versioned<S>(bucket: &str, storage: &S) -> Result<bool>
where
    S: ObjectStorage + ?Sized,
{
    let status = storage.bucket_versioning_status(bucket)?;
    Ok(status == VERSIONING_ENABLED)
}
