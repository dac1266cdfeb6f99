//! Proxylink CLI - Infer truth links for tracks from overlapping reference tracks.

use clap::Parser;
use proxylink_cli::commands;
use proxylink_cli::{Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> proxylink_cli::Result<()> {
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    match cli.command {
        Command::Associate(args) => commands::execute_associate(args, &formatter),
        Command::Config(args) => commands::execute_config(args, &formatter),
    }
}
