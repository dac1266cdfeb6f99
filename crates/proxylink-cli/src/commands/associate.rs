//! Associate command implementation.

use crate::cli::AssociateArgs;
use crate::config::{self, OutputFormat};
use crate::error::Result;
use crate::output::{Formatter, LinkRow};
use proxylink_associator::{AssociationOutcome, AssociatorMetrics, TruthPropagationEngine};
use proxylink_store::{load_events, LinkedOutput};
use tracing::info;

/// Everything one run over an event file produced.
#[derive(Debug)]
pub struct AssociateReport {
    /// Outcome per event, in file order
    pub outcomes: Vec<AssociationOutcome>,

    /// Inferred links across all events
    pub rows: Vec<LinkRow>,

    /// Engine counters accumulated over the run
    pub metrics: AssociatorMetrics,
}

/// Run the engine over every event of the file named in `args`.
pub fn associate(args: &AssociateArgs) -> Result<AssociateReport> {
    let config = config::resolve(&args.engine)?;
    let mut engine = TruthPropagationEngine::new(config)?;

    let events = load_events(&args.events)?;
    info!("Loaded {} event(s) from {}", events.len(), args.events.display());

    let mut outcomes = Vec::with_capacity(events.len());
    let mut rows = Vec::new();
    let mut output = LinkedOutput::new();

    for (position, store) in events.iter().enumerate() {
        output.clear();
        outcomes.push(engine.execute(store, &mut output)?);
        rows.extend(LinkRow::collect(position, store, &output));
    }

    Ok(AssociateReport {
        outcomes,
        rows,
        metrics: engine.metrics().clone(),
    })
}

/// Execute the associate command.
pub fn execute_associate(args: AssociateArgs, formatter: &Formatter) -> Result<()> {
    let report = associate(&args)?;

    if formatter.format() == OutputFormat::Table {
        for (event, outcome) in report.outcomes.iter().enumerate() {
            println!("{}", formatter.outcome(event, outcome));
        }
    }

    println!("{}", formatter.format_links(&report.rows)?);

    if formatter.format() == OutputFormat::Table {
        println!();
        println!("{}", report.metrics.summary());
        println!(
            "{}",
            formatter.success(&format!(
                "Processed {} event(s), {} link(s)",
                report.outcomes.len(),
                report.rows.len()
            ))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::EngineArgs;
    use crate::error::CliError;
    use std::io::Write;

    const EVENTS: &str = r#"[
        {
            "tracks": {
                "Rec/Track/Downstream": [
                    { "key": 0, "ids": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9] },
                    { "key": 1, "ids": [50, 51] }
                ],
                "Rec/Track/Best": [ { "key": 7, "ids": [2, 3, 4, 5, 6, 7, 8, 9, 10, 11] } ]
            },
            "truth_links": {
                "Rec/Track/Best": [ { "key": 7, "particle": 3, "weight": 0.5 } ]
            }
        },
        { "tracks": {} }
    ]"#;

    fn args(file: &tempfile::NamedTempFile) -> AssociateArgs {
        AssociateArgs {
            events: file.path().to_path_buf(),
            engine: EngineArgs {
                input: Some("Rec/Track/Downstream".to_string()),
                ..EngineArgs::default()
            },
        }
    }

    fn events_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EVENTS.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_associate_over_file() {
        let file = events_file();
        let report = associate(&args(&file)).unwrap();

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(
            report.outcomes[0],
            AssociationOutcome::Linked {
                inputs: 2,
                matched: 1,
                links: 1
            }
        );
        assert_eq!(report.outcomes[1], AssociationOutcome::MissingInput);

        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.event, 0);
        assert_eq!(row.location, "Rec/Track/Downstream");
        assert_eq!(row.key, Some(0));
        assert_eq!(row.particle, 3);
        assert_eq!(row.weight, 0.8 * 0.5);

        assert_eq!(report.metrics.events_processed, 2);
        assert_eq!(report.metrics.missing_input_events, 1);
    }

    #[test]
    fn test_threshold_override() {
        let file = events_file();
        let mut args = args(&file);
        args.engine.threshold = Some(0.9);

        let report = associate(&args).unwrap();
        assert!(report.rows.is_empty());
    }

    #[test]
    fn test_missing_input_location_rejected() {
        let file = events_file();
        let mut args = args(&file);
        args.engine.input = None;

        let err = associate(&args).unwrap_err();
        assert!(matches!(err, CliError::Associator(_)));
    }

    #[test]
    fn test_missing_events_file() {
        let file = events_file();
        let mut args = args(&file);
        args.events = "/nonexistent/events.json".into();

        let err = associate(&args).unwrap_err();
        assert!(matches!(err, CliError::Store(_)));
    }
}
