//! CLI-specific error types
//!
//! Every CLI error is fatal; main prints it and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Init target already holds data
    #[error("Data file already exists at {}; pass --force to overwrite", .0.display())]
    AlreadyInitialized(PathBuf),

    /// Seeding the data file failed
    #[error("Failed to seed data file: {0}")]
    Seed(#[from] StoreError),

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Server failed to bind or crashed while serving
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
