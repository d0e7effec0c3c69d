//! CLI error types.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced at the CLI boundary.
#[derive(Debug, Error)]
pub enum CliError {
    /// One or more input parameters failed validation. Each message is
    /// printed on its own line before this error is returned.
    #[error("{0} validation error(s); nothing was calculated")]
    Validation(usize),

    /// Unsupported command line argument value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine failed; internal arithmetic detail is deliberately not
    /// exposed here.
    #[error("An error occurred during calculation. Please check your parameters.")]
    Calculation,

    /// Result serialisation failure.
    #[error("Failed to serialise results: {0}")]
    Serialise(#[from] serde_json::Error),
}
