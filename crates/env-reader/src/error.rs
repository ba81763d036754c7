//! Error types for typed environment lookups.
//!
//! Responsibilities:
//! - Describe why a present environment variable could not be converted.
//!
//! Does NOT handle:
//! - Absent variables, which are never an error (the default applies).
//!
//! Invariants:
//! - Every variant names the variable key and the expected type.
//! - No variant carries the raw variable value, to prevent secret leakage.

use thiserror::Error;

use crate::value::{ParseFailure, ValueKind};

/// Errors returned by the fallible `try_` accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("Invalid value for {key}: expected {expected}, {reason}")]
    InvalidValue {
        key: String,
        expected: ValueKind,
        reason: String,
    },

    #[error("Value for {key} is out of range for {expected}")]
    OutOfRange { key: String, expected: ValueKind },
}

impl EnvError {
    pub(crate) fn from_failure(key: &str, expected: ValueKind, failure: ParseFailure) -> Self {
        match failure {
            ParseFailure::Syntax(reason) => EnvError::InvalidValue {
                key: key.to_string(),
                expected,
                reason,
            },
            ParseFailure::Range => EnvError::OutOfRange {
                key: key.to_string(),
                expected,
            },
        }
    }

    /// The variable that failed to convert.
    pub fn key(&self) -> &str {
        match self {
            EnvError::InvalidValue { key, .. } | EnvError::OutOfRange { key, .. } => key,
        }
    }

    /// The type the variable was expected to hold.
    pub fn expected(&self) -> ValueKind {
        match self {
            EnvError::InvalidValue { expected, .. } | EnvError::OutOfRange { expected, .. } => {
                *expected
            }
        }
    }
}
