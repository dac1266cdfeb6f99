//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use proxylink_associator::AssociationOutcome;
use proxylink_store::{LinkedOutput, MemoryEventStore};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// One inferred link, resolved back to its container key for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRow {
    /// Event position in the input file
    pub event: usize,

    /// Location of the linked object
    pub location: String,

    /// Container key of the linked object, if the store knows it
    pub key: Option<u32>,

    /// Truth particle
    pub particle: u128,

    /// Link weight
    pub weight: f64,
}

impl LinkRow {
    /// Rows for every link `output` holds, in write order
    pub fn collect(event: usize, store: &MemoryEventStore, output: &LinkedOutput) -> Vec<Self> {
        output
            .locations()
            .flat_map(|location| {
                output.links_at(location).iter().map(move |link| LinkRow {
                    event,
                    location: location.to_string(),
                    key: store.key_of(link.object).map(|(_, key)| key),
                    particle: link.particle.value(),
                    weight: link.weight,
                })
            })
            .collect()
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format links output.
    pub fn format_links(&self, rows: &[LinkRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Table => Ok(self.format_links_table(rows)),
            OutputFormat::Quiet => Ok(self.format_links_quiet(rows)),
        }
    }

    /// Format links as a table.
    fn format_links_table(&self, rows: &[LinkRow]) -> String {
        if rows.is_empty() {
            return self.colorize("No links found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Event", "Location", "Key", "Particle", "Weight"]);

        for row in rows {
            let key = row.key.map(|k| k.to_string()).unwrap_or_else(|| "-".to_string());
            builder.push_record([
                row.event.to_string(),
                row.location.clone(),
                key,
                format!("mcp:{}", row.particle),
                format!("{:.4}", row.weight),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format links in quiet mode (event, key, particle, weight per line).
    fn format_links_quiet(&self, rows: &[LinkRow]) -> String {
        rows.iter()
            .map(|row| {
                let key = row.key.map(|k| k.to_string()).unwrap_or_else(|| "-".to_string());
                format!("{} {} {} {}", row.event, key, row.particle, row.weight)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the outcome of one event.
    pub fn outcome(&self, event: usize, outcome: &AssociationOutcome) -> String {
        match outcome {
            AssociationOutcome::Linked {
                inputs,
                matched,
                links,
            } => self.info(&format!(
                "Event {}: matched {} of {} tracks, {} link(s)",
                event, matched, inputs, links
            )),
            AssociationOutcome::MissingInput => {
                self.warning(&format!("Event {}: no input tracks", event))
            }
            AssociationOutcome::NoUsableReferences => {
                self.warning(&format!("Event {}: no tracks with truth links", event))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_row() -> LinkRow {
        LinkRow {
            event: 0,
            location: "Rec/Track/Downstream".to_string(),
            key: Some(4),
            particle: 17,
            weight: 0.63,
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_links(&[create_test_row()]).unwrap();
        assert!(output.contains("\"particle\": 17"));
        assert!(output.contains("\"weight\": 0.63"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_links(&[create_test_row()]).unwrap();
        assert_eq!(output, "0 4 17 0.63");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_links(&[create_test_row()]).unwrap();
        assert!(output.contains("Particle"));
        assert!(output.contains("mcp:17"));
        assert!(output.contains("0.6300"));
    }

    #[test]
    fn test_empty_links() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_links(&[]).unwrap();
        assert!(output.contains("No links found"));
    }

    #[test]
    fn test_outcome_messages() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.outcome(2, &AssociationOutcome::MissingInput);
        assert_eq!(msg, "⚠ Event 2: no input tracks");

        let msg = formatter.outcome(
            0,
            &AssociationOutcome::Linked {
                inputs: 3,
                matched: 1,
                links: 2,
            },
        );
        assert!(msg.contains("matched 1 of 3 tracks"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
