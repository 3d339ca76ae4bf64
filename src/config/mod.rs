//! Configuration for the buildgate CLI.
//!
//! This module defines the GateConfig struct loaded from a YAML file passed
//! with `--config`. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), defaults for every field, and validation of values.

mod model;
mod operations;
pub mod types;


pub use model::GateConfig;
pub use types::RestrictedEnvPolicy;
