//! Proxylink CLI library.
//!
//! This library provides the core functionality for the `proxylink` command-line
//! interface: argument parsing, configuration resolution, command execution and
//! output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::OutputFormat;
pub use error::{CliError, Result};
pub use output::Formatter;
