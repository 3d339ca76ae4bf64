//! Implementation of the `buildgate rules` command.

use crate::cli::ListArgs;
use buildgate::catalogue::{Rule, Severity};
use buildgate::error::{GateError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RuleEntry {
    id: &'static str,
    severity: Severity,
    message: &'static str,
}

fn catalogue_entries() -> Vec<RuleEntry> {
    Rule::ALL
        .iter()
        .map(|rule| RuleEntry {
            id: rule.id(),
            severity: rule.severity(),
            message: rule.message(),
        })
        .collect()
}

/// Print every catalogue rule with its severity and literal message.
pub fn cmd_rules(args: ListArgs) -> Result<()> {
    let entries = catalogue_entries();

    if args.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| GateError::UserError(format!("failed to serialize rules: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    for entry in &entries {
        println!("{:<32} {:<12} {}", entry.id, entry.severity, entry.message);
    }
    Ok(())
}
