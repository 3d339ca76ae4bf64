//! Exit code constants for the buildgate CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable snapshot or config)
//! - 2: Validation failure (a recoverable override rule was violated)
//! - 3: Invalid input (a fatal precondition was violated)
//! - 4: Collaborator failure (an injected client call failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable or unparsable input files.
pub const USER_ERROR: i32 = 1;

/// Validation failure: an enumerated override or essential field is invalid.
pub const VALIDATION_FAILURE: i32 = 2;

/// Fatal invalid input: missing collaborator, missing region/credentials, bad proxy.
pub const INVALID_INPUT: i32 = 3;

/// Collaborator failure: object storage or other injected client returned an error.
pub const COLLABORATOR_FAILURE: i32 = 4;
