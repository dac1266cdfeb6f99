//! Proxylink Associator
//!
//! Builds truth links for tracked objects that have none, by borrowing the
//! truth links of reference objects that share enough identifiers with them.
//!
//! # Overview
//!
//! Each invocation (one per event) runs two stages:
//! - **Matching**: every unlinked object is scored against every reference
//!   object of every configured location. Pairs whose overlap fraction reaches
//!   `TrackMatchFrac` become weighted relations.
//! - **Propagation**: for every relation, the reference object's truth links
//!   are followed. A path's weight is the relation weight times the truth-link
//!   weight; for each truth particle the largest path weight is kept.
//!
//! The result is an approximation. It is not suitable for rigorous efficiency
//! or fake-rate studies, especially when object-to-object matching is not
//! fully efficient.
//!
//! # Usage
//!
//! ```
//! use proxylink_associator::{AssociationOutcome, AssociatorConfig, TruthPropagationEngine};
//! use proxylink_store::{LinkedOutput, MemoryEventStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryEventStore::new();
//! let mut output = LinkedOutput::new();
//! let config = AssociatorConfig::for_input("Rec/Track/Downstream");
//! let mut engine = TruthPropagationEngine::new(config)?;
//!
//! // An event without input objects is skipped, not failed
//! let outcome = engine.execute(&store, &mut output)?;
//! assert_eq!(outcome, AssociationOutcome::MissingInput);
//! println!("{}", engine.metrics().summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! InputTracks = "Rec/Track/Downstream"
//! TrackMatchFrac = 0.7
//! LinkedTracks = ["Rec/Track/Best"]
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod metrics;

pub use config::{AssociatorConfig, DEFAULT_LINKED_LOCATION, DEFAULT_MATCH_FRACTION};
pub use engine::{AssociationOutcome, ReferenceInput, TruthPropagationEngine};
pub use error::AssociatorError;
pub use metrics::{AssociatorMetrics, Counter};
