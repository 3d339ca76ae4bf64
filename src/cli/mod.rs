//! CLI argument parsing for buildgate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Buildgate: preflight validation of build override configuration.
///
/// Checks a resolved configuration snapshot against the build service's
/// accepted vocabularies and ranges before a build is submitted.
#[derive(Parser, Debug)]
#[command(name = "buildgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit debug diagnostics on stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for buildgate.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a configuration snapshot.
    ///
    /// Runs the essential, override, source, environment and client checks
    /// in order and stops at the first failure.
    Check(CheckArgs),

    /// List the validation message catalogue.
    Rules(ListArgs),

    /// List the accepted values of every closed vocabulary.
    Vocab(ListArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Snapshot file (YAML, or JSON when the extension is `.json`).
    pub snapshot: PathBuf,

    /// Config file controlling optional checks and the events log.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Append an audit event to this NDJSON file (overrides config).
    #[arg(long)]
    pub events_log: Option<PathBuf>,
}

/// Arguments for the listing commands.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
