//! Implementation of the `buildgate vocab` command.

use crate::cli::ListArgs;
use buildgate::error::{GateError, Result};
use buildgate::vocabulary::all_vocabularies;

/// Print every closed vocabulary and its accepted values.
pub fn cmd_vocab(args: ListArgs) -> Result<()> {
    let vocabularies = all_vocabularies();

    if args.json {
        let json = serde_json::to_string_pretty(&vocabularies)
            .map_err(|e| GateError::UserError(format!("failed to serialize vocabularies: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    for vocabulary in &vocabularies {
        println!("{}: {}", vocabulary.name, vocabulary.values.join(", "));
    }
    Ok(())
}
