//! Error types for association runs

use thiserror::Error;

/// Errors that can occur while associating
///
/// Missing inputs or references are not errors; they are logged and reported
/// through [`crate::AssociationOutcome`].
#[derive(Error, Debug)]
pub enum AssociatorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output sink rejected a link
    #[error("Output sink error: {0}")]
    Sink(String),

    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ConfigFile(#[from] std::io::Error),

    /// Failed to parse config TOML
    #[error("Failed to parse config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
