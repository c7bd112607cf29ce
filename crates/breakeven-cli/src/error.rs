//! Error types for the CLI

use breakeven::core::{BreakEvenError, ValidationError};
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Scenario rejected by the input validator
    #[error("Invalid scenario: {0}")]
    Validation(#[from] ValidationError),

    /// Library error while rendering
    #[error("{0}")]
    Library(#[from] BreakEvenError),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal UI unavailable or failed
    #[error("Terminal UI error: {message}")]
    Terminal {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a terminal UI error
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }
}
