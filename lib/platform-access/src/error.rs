//! Error types for the platform-access crate.
//!
//! Validation failures are user-facing: the `Display` text of each variant
//! is exactly the notice shown on the login screen.

use std::fmt;

/// Login form validation failures.
///
/// Preconditions are checked in order at submit time and the first failure
/// aborts the submit with no state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No role was selected.
    MissingRole,
    /// The username is empty after trimming leading/trailing whitespace.
    MissingUsername,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRole => write!(f, "Please select a role to continue"),
            Self::MissingUsername => write!(f, "Please enter a username"),
        }
    }
}

impl std::error::Error for ValidationError {}
