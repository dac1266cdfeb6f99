//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Proxylink - Infer truth links for tracks through overlapping reference tracks.
#[derive(Debug, Parser)]
#[command(name = "proxylink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one link per line)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the association over every event of an event file
    Associate(AssociateArgs),

    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

/// Engine configuration sources shared by every command.
///
/// Command-line values override the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct EngineArgs {
    /// TOML configuration file
    #[arg(short, long, env = "PROXYLINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Location of the tracks to link (InputTracks)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Minimum identifier overlap fraction (TrackMatchFrac)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Reference locations carrying truth links, in priority order (LinkedTracks)
    #[arg(short, long = "linked", num_args = 1..)]
    pub linked: Vec<String>,
}

/// Arguments for the associate command.
#[derive(Debug, Args)]
pub struct AssociateArgs {
    /// JSON event file (one event or an array of events)
    #[arg(short, long)]
    pub events: PathBuf,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for the config command.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub engine: EngineArgs,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
