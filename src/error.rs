//! Error types for calckit
//!
//! Arithmetic in this crate is checked: overflow and invalid input surface
//! as typed errors instead of wrapping or panicking.

use thiserror::Error;

/// Errors produced by calckit operations
#[derive(Debug, Error)]
pub enum CalcKitError {
    /// Signed 64-bit arithmetic overflowed
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Input outside the domain of the operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization errors from report output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcKitError {
    /// Create an overflow error with context
    pub fn overflow(msg: impl Into<String>) -> Self {
        CalcKitError::Overflow(msg.into())
    }

    /// Create an invalid input error with context
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CalcKitError::InvalidInput(msg.into())
    }
}

/// Convenience Result type alias for calckit
pub type Result<T> = std::result::Result<T, CalcKitError>;
