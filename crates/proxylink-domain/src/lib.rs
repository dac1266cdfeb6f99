//! Proxylink Domain Layer
//!
//! This crate contains the data model and leaf components for inferring
//! ground-truth links for tracked objects that lack them. It has no I/O and
//! defines the trait interfaces the association engine needs from the event
//! store that owns the data.
//!
//! ## Key Concepts
//!
//! - **Tracked object**: an entity made of discrete identifier codes
//! - **Reference object**: a tracked object that already carries truth links
//! - **Overlap score**: shared identifiers over the unlinked object's identifier count
//! - **Weighted relation**: "reference object matches unlinked object with weight w"
//! - **Truth link**: weighted association between an object and a truth particle
//!
//! ## Architecture
//!
//! - Pure logic only, no logging or configuration
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod matcher;
pub mod object;
pub mod provenance;
pub mod relation_table;
pub mod relationship;
pub mod traits;
pub mod truth;

// Re-exports for convenience
pub use object::{IdentifierSet, ObjectId, ParticleId, TrackCollection, TrackedObject};
pub use provenance::ProvenanceIndex;
pub use relation_table::WeightedRelationTable;
pub use relationship::{CollectionIndex, WeightedRelation};
pub use traits::{EventStore, LinkSink, TruthLinkSource};
pub use truth::{AggregatedTruthLink, TruthLink};
