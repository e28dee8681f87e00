//! Error types for the CLI application.

use permitdesk_populate::PopulateError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Population flow error
    #[error("{0}")]
    Populate(#[from] PopulateError),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// API key missing from the environment
    #[error("no API key: set the {0} environment variable")]
    MissingApiKey(String),
}
