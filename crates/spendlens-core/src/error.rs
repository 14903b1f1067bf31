//! Centralized error types for SpendLens.

use thiserror::Error;

/// Main error type for SpendLens operations.
#[derive(Error, Debug)]
pub enum LensError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for SpendLens operations.
pub type LensResult<T> = Result<T, LensError>;

impl LensError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
