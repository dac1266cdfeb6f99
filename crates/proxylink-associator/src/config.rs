//! Configuration for the association engine
//!
//! Option names follow the keys the surrounding framework already uses
//! (`InputTracks`, `TrackMatchFrac`, `LinkedTracks`).

use crate::AssociatorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default reference location
pub const DEFAULT_LINKED_LOCATION: &str = "Rec/Track/Best";

/// Default stage-1 match threshold
pub const DEFAULT_MATCH_FRACTION: f64 = 0.7;

/// Configuration for the truth propagation engine
///
/// # Examples
///
/// ```
/// use proxylink_associator::AssociatorConfig;
///
/// let config = AssociatorConfig::for_input("Rec/Track/Downstream");
/// assert_eq!(config.track_match_frac, 0.7);
/// assert_eq!(config.linked_tracks, vec!["Rec/Track/Best".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociatorConfig {
    /// Location of the objects to build truth links for
    /// No default produces useful output; must be set.
    #[serde(rename = "InputTracks", default)]
    pub input_tracks: String,

    /// Fraction of the input object's identifiers that must be found on a
    /// reference object for the two to be related
    /// Default: 0.7
    #[serde(rename = "TrackMatchFrac", default = "default_match_frac")]
    pub track_match_frac: f64,

    /// Reference locations carrying truth links, in provenance order
    /// Default: ["Rec/Track/Best"]
    #[serde(rename = "LinkedTracks", default = "default_linked_tracks")]
    pub linked_tracks: Vec<String>,
}

fn default_match_frac() -> f64 {
    DEFAULT_MATCH_FRACTION
}

fn default_linked_tracks() -> Vec<String> {
    vec![DEFAULT_LINKED_LOCATION.to_string()]
}

impl Default for AssociatorConfig {
    /// Defaults with an unset input location
    fn default() -> Self {
        Self {
            input_tracks: String::new(),
            track_match_frac: DEFAULT_MATCH_FRACTION,
            linked_tracks: default_linked_tracks(),
        }
    }
}

impl AssociatorConfig {
    /// Default configuration reading unlinked objects from `input`
    pub fn for_input(input: impl Into<String>) -> Self {
        Self {
            input_tracks: input.into(),
            ..Self::default()
        }
    }

    /// Replace the reference locations
    pub fn with_linked_tracks<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.linked_tracks = locations.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the match threshold
    pub fn with_match_frac(mut self, fraction: f64) -> Self {
        self.track_match_frac = fraction;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssociatorError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, AssociatorError> {
        let config: AssociatorConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, AssociatorError> {
        toml::to_string_pretty(self)
            .map_err(|e| AssociatorError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), AssociatorError> {
        if self.input_tracks.is_empty() {
            return Err(AssociatorError::Config("InputTracks must be set".to_string()));
        }

        // A threshold above 1 matches nothing, which is allowed
        if self.track_match_frac.is_nan() || self.track_match_frac <= 0.0 {
            return Err(AssociatorError::Config(format!(
                "TrackMatchFrac {} must be positive",
                self.track_match_frac
            )));
        }

        Ok(())
    }
}
