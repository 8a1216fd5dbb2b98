//! # Product Store Errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Product store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    // Read-side errors
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read data file: {0}")]
    ReadFailed(String),

    #[error("Failed to decode product collection: {0}")]
    Decode(String),

    // Write-side errors
    #[error("Failed to write data file: {0}")]
    WriteFailed(String),

    #[error("Failed to encode product collection: {0}")]
    Encode(String),

    // Lock errors
    #[error("Product store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// True when the error happened persisting data rather than reading it.
    pub fn is_write_error(&self) -> bool {
        matches!(self, StoreError::WriteFailed(_) | StoreError::Encode(_))
    }
}
