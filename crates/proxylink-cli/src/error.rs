//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine or configuration error
    #[error("Associator error: {0}")]
    Associator(#[from] proxylink_associator::AssociatorError),

    /// Event file error
    #[error("Store error: {0}")]
    Store(#[from] proxylink_store::StoreError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
