//! Proxylink Storage Layer
//!
//! In-memory implementations of the event-store collaborators the association
//! engine depends on.
//!
//! # Architecture
//!
//! - [`MemoryEventStore`] holds one event: object collections and their truth
//!   links, both keyed by location
//! - [`MemoryTruthLinks`] is a one-to-many truth-link table for one location
//! - [`LinkedOutput`] collects the inferred links, keyed by location
//! - JSON event files are read through [`load_events`] / [`parse_events`]
//!
//! # Examples
//!
//! ```
//! use proxylink_domain::{EventStore, IdentifierSet, TrackCollection, TrackedObject};
//! use proxylink_store::MemoryEventStore;
//!
//! let mut store = MemoryEventStore::new();
//! let object = TrackedObject::new(0, IdentifierSet::new([1, 2, 3]));
//! let best = TrackCollection::new("Rec/Track/Best", vec![object]);
//! store.insert_tracks(best);
//!
//! assert!(store.tracks("Rec/Track/Best").is_some());
//! assert!(store.truth_links("Rec/Track/Best").is_none());
//! ```

#![warn(missing_docs)]

mod event;
mod output;

use proxylink_domain::traits::{EventStore, TruthLinkSource};
use proxylink_domain::{ObjectId, TrackCollection, TruthLink};
use std::collections::HashMap;
use thiserror::Error;

pub use event::{load_events, parse_events, EventRecord, TrackRecord, TruthLinkRecord};
pub use output::LinkedOutput;

/// Errors that can occur while building an event store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read an event file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A truth link refers to an object key that does not exist
    #[error("Unknown object key {key} at {location}")]
    UnknownObject {
        /// Location of the link table
        location: String,
        /// Missing key
        key: u32,
    },

    /// A truth-link weight outside (0, 1]
    #[error("Truth link weight {weight} for key {key} at {location} is outside (0, 1]")]
    InvalidWeight {
        /// Location of the link table
        location: String,
        /// Linked key
        key: u32,
        /// Offending weight
        weight: f64,
    },

    /// The same key appears twice in one collection
    #[error("Duplicate object key {key} at {location}")]
    DuplicateKey {
        /// Location of the collection
        location: String,
        /// Repeated key
        key: u32,
    },
}

/// One-to-many table of truth links for the objects of one location
#[derive(Debug, Clone, Default)]
pub struct MemoryTruthLinks {
    by_object: HashMap<ObjectId, Vec<TruthLink>>,
}

impl MemoryTruthLinks {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one link; links of an object keep insertion order
    pub fn add(&mut self, link: TruthLink) {
        self.by_object.entry(link.object).or_default().push(link);
    }

    /// Number of links
    pub fn len(&self) -> usize {
        self.by_object.values().map(Vec::len).sum()
    }

    /// True if the table holds no links
    pub fn is_empty(&self) -> bool {
        self.by_object.is_empty()
    }
}

impl FromIterator<TruthLink> for MemoryTruthLinks {
    fn from_iter<I: IntoIterator<Item = TruthLink>>(iter: I) -> Self {
        let mut table = Self::new();
        for link in iter {
            table.add(link);
        }
        table
    }
}

impl TruthLinkSource for MemoryTruthLinks {
    fn links_of(&self, object: ObjectId) -> Vec<TruthLink> {
        self.by_object.get(&object).cloned().unwrap_or_default()
    }
}

/// In-memory store for a single event
#[derive(Debug, Clone, Default)]
pub struct MemoryEventStore {
    tracks: HashMap<String, TrackCollection>,
    truth_links: HashMap<String, MemoryTruthLinks>,
    keys: HashMap<ObjectId, (String, u32)>,
}

impl MemoryEventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a collection at its own location, replacing any previous one
    pub fn insert_tracks(&mut self, collection: TrackCollection) {
        for object in &collection {
            self.keys
                .insert(object.id, (collection.location.clone(), object.key));
        }
        self.tracks.insert(collection.location.clone(), collection);
    }

    /// Store the truth links of the objects at `location`
    pub fn insert_truth_links(&mut self, location: impl Into<String>, links: MemoryTruthLinks) {
        self.truth_links.insert(location.into(), links);
    }

    /// Location and container key of a stored object
    pub fn key_of(&self, id: ObjectId) -> Option<(&str, u32)> {
        self.keys.get(&id).map(|(location, key)| (location.as_str(), *key))
    }

    /// Locations holding object collections
    pub fn locations(&self) -> Vec<&str> {
        let mut locations: Vec<&str> = self.tracks.keys().map(String::as_str).collect();
        locations.sort_unstable();
        locations
    }
}

impl EventStore for MemoryEventStore {
    fn tracks(&self, location: &str) -> Option<&TrackCollection> {
        self.tracks.get(location)
    }

    fn truth_links(&self, location: &str) -> Option<Box<dyn TruthLinkSource + '_>> {
        self.truth_links
            .get(location)
            .map(|links| Box::new(links) as Box<dyn TruthLinkSource + '_>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxylink_domain::{IdentifierSet, ParticleId, TrackedObject};

    #[test]
    fn test_truth_links_one_to_many() {
        let object = ObjectId::from_value(1);
        let links: MemoryTruthLinks = [
            TruthLink::new(object, ParticleId::from_value(10), 0.9),
            TruthLink::new(object, ParticleId::from_value(11), 0.1),
        ]
        .into_iter()
        .collect();

        let found = links.links_of(object);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].particle, ParticleId::from_value(10));
        assert!(links.links_of(ObjectId::from_value(2)).is_empty());
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_store_lookup() {
        let object = TrackedObject::new(4, IdentifierSet::new([1, 2]));
        let mut store = MemoryEventStore::new();
        store.insert_tracks(TrackCollection::new("A", vec![object.clone()]));
        store.insert_truth_links("A", MemoryTruthLinks::new());

        assert_eq!(store.tracks("A").map(TrackCollection::len), Some(1));
        assert!(store.tracks("B").is_none());
        assert!(store.truth_links("A").is_some());
        assert!(store.truth_links("B").is_none());
        assert_eq!(store.key_of(object.id), Some(("A", 4)));
        assert_eq!(store.locations(), vec!["A"]);
    }
}
