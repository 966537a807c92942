//! Error types for the number normalization library.
//!
//! The error surface is deliberately small: the only thing that can go wrong
//! during normalization is malformed input. Numbers that simply cannot be
//! matched against the directory are returned unchanged and are never errors.

use std::fmt;

/// Result type alias for normalization operations.
pub type DialplanResult<T> = Result<T, DialplanError>;

/// Error type for all normalization operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialplanError {
    /// Invalid input parameters (empty numbers, caller too short to probe)
    InvalidInput { parameter: String, reason: String },
}

impl DialplanError {
    /// Convenience constructor for the common case.
    pub fn invalid_input(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DialplanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { parameter, reason } => {
                write!(f, "Invalid input for '{}': {}", parameter, reason)
            }
        }
    }
}

impl std::error::Error for DialplanError {}
