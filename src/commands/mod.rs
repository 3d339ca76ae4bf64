//! Command implementations for buildgate.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod check;
mod rules;
mod vocab;

use crate::cli::Command;
use buildgate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Rules(args) => rules::cmd_rules(args),
        Command::Vocab(args) => vocab::cmd_vocab(args),
    }
}
