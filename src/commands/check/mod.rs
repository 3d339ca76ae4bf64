//! Implementation of the `buildgate check` command.
//!
//! # Steps
//!
//! 1. Load config (if `--config` was given) and the snapshot file
//! 2. Run the preflight steps in order, stopping at the first failure
//! 3. Print the report (text or JSON)
//! 4. Append an audit event when an events log is configured (a write
//!    failure only fails the command when every step passed)
//! 5. Exit with the code matching the failure's severity

mod report;
mod steps;


use crate::cli::CheckArgs;
use buildgate::config::GateConfig;
use buildgate::error::Result;
use buildgate::snapshot::ConfigurationSnapshot;
use std::path::PathBuf;

pub use report::CheckReport;
pub use steps::run_steps;

/// Execute the `buildgate check` command.
///
/// # Exit Codes
///
/// - 0: All checks passed
/// - 1: User error (unreadable snapshot or config)
/// - 2: A recoverable rule or the environment check failed
/// - 3: A fatal precondition (region, credentials, proxy) failed
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => GateConfig::load(path)?,
        None => GateConfig::default(),
    };

    let snapshot = ConfigurationSnapshot::load(&args.snapshot)?;
    tracing::debug!(snapshot = %args.snapshot.display(), "snapshot loaded");

    let report = CheckReport::new(
        &args.snapshot,
        &snapshot.project_name,
        run_steps(&snapshot, &config),
    );

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }

    let events_log = args
        .events_log
        .clone()
        .or_else(|| config.events_log.as_ref().map(PathBuf::from));
    let failure = report.failure().and_then(|step| step.to_error());

    if let Some(events_log) = events_log {
        if let Err(err) = report.record_event(&events_log) {
            // A failed check keeps its own exit code.
            if failure.is_none() {
                return Err(err);
            }
            tracing::warn!(
                events_log = %events_log.display(),
                error = %err,
                "failed to record check event"
            );
        }
    }

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
