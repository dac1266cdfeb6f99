//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the association core and the
//! event store that owns the data. Implementations live in other crates.

use crate::{AggregatedTruthLink, ObjectId, TrackCollection, TruthLink};

/// Read-only view over a reference collection's existing truth links
///
/// Implemented by the infrastructure layer (proxylink-store)
pub trait TruthLinkSource {
    /// All truth links of `object`, possibly many; empty if it has none
    fn links_of(&self, object: ObjectId) -> Vec<TruthLink>;
}

impl<T: TruthLinkSource + ?Sized> TruthLinkSource for &T {
    fn links_of(&self, object: ObjectId) -> Vec<TruthLink> {
        (**self).links_of(object)
    }
}

/// Source of per-event input collections
///
/// Absence of either the tracks or the truth links at a location is reported
/// independently as `None`.
pub trait EventStore {
    /// Object collection stored at `location`
    fn tracks(&self, location: &str) -> Option<&TrackCollection>;

    /// Truth links attached to the objects stored at `location`
    fn truth_links(&self, location: &str) -> Option<Box<dyn TruthLinkSource + '_>>;
}

/// Destination for inferred links
///
/// Implemented by the infrastructure layer (proxylink-store)
pub trait LinkSink {
    /// Error type for sink operations
    type Error;

    /// Record one link for an object of the collection at `location`
    fn link(&mut self, location: &str, link: AggregatedTruthLink) -> Result<(), Self::Error>;
}
