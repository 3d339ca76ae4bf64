//! Configuration snapshot for a build submission.
//!
//! A snapshot is the flat set of resolved override fields that upstream
//! orchestration hands to the validator immediately before a build is
//! submitted. It can be built in code or loaded from a YAML/JSON file.

mod de;
mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{ConfigurationSnapshot, EnvironmentVariable};
