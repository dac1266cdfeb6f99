//! Configuration resolution for the CLI.

use crate::cli::EngineArgs;
use crate::error::Result;
use proxylink_associator::AssociatorConfig;
use serde::{Deserialize, Serialize};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Build the effective engine configuration.
///
/// Starts from the configuration file when one is given, otherwise from the
/// defaults, then applies every command-line override. The result is not
/// validated here; the engine does that on construction.
pub fn resolve(args: &EngineArgs) -> Result<AssociatorConfig> {
    let mut config = match &args.config {
        Some(path) => AssociatorConfig::from_file(path)?,
        None => AssociatorConfig::default(),
    };

    if let Some(input) = &args.input {
        config.input_tracks = input.clone();
    }

    if let Some(threshold) = args.threshold {
        config.track_match_frac = threshold;
    }

    if !args.linked.is_empty() {
        config.linked_tracks = args.linked.clone();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(&EngineArgs::default()).unwrap();
        assert_eq!(config, AssociatorConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "InputTracks = \"Rec/Track/Downstream\"\nTrackMatchFrac = 0.8\nLinkedTracks = [\"A\"]"
        )
        .unwrap();

        let args = EngineArgs {
            config: Some(file.path().to_path_buf()),
            threshold: Some(0.6),
            ..EngineArgs::default()
        };
        let config = resolve(&args).unwrap();

        assert_eq!(config.input_tracks, "Rec/Track/Downstream");
        assert_eq!(config.track_match_frac, 0.6);
        assert_eq!(config.linked_tracks, vec!["A".to_string()]);
    }

    #[test]
    fn test_missing_file() {
        let args = EngineArgs {
            config: Some("/nonexistent/proxylink.toml".into()),
            ..EngineArgs::default()
        };
        assert!(resolve(&args).is_err());
    }
}
