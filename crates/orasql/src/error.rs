//! Error types for orasql

use thiserror::Error;

/// Result type alias for builder operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types raised while assembling a statement.
///
/// Every variant is a programmer error surfaced by the setter or constructor
/// that received the bad argument. Rendering an already-built statement never
/// fails.
#[derive(Debug, Error)]
pub enum SqlError {
    /// A string argument was empty, whitespace-only, or failed its shape pattern
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required nested statement or statement list was missing or empty
    #[error("Null argument: {0}")]
    NullArgument(String),
}

impl SqlError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a null-argument error
    pub fn null_argument(message: impl Into<String>) -> Self {
        Self::NullArgument(message.into())
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is a null-argument error
    pub fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument(_))
    }
}
