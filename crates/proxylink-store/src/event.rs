//! JSON event records
//!
//! An event file holds either one event object or an array of them:
//!
//! ```json
//! {
//!   "tracks": { "Rec/Track/Best": [ { "key": 0, "ids": [1, 2, 3] } ] },
//!   "truth_links": { "Rec/Track/Best": [ { "key": 0, "particle": 7, "weight": 0.9 } ] }
//! }
//! ```
//!
//! Truth-link keys refer to objects of the same location. Links at a location
//! without tracks are dropped with a warning; weights must lie in (0, 1].

use crate::{MemoryEventStore, MemoryTruthLinks, StoreError};
use proxylink_domain::{IdentifierSet, ParticleId, TrackCollection, TrackedObject, TruthLink};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::warn;

/// One tracked object as stored in an event file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Container key, unique within its location
    pub key: u32,

    /// Identifier codes
    #[serde(default)]
    pub ids: Vec<u32>,
}

/// One truth link as stored in an event file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruthLinkRecord {
    /// Key of the linked object at the same location
    pub key: u32,

    /// Truth particle
    pub particle: u64,

    /// Link weight
    pub weight: f64,
}

/// One event as stored in an event file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Object collections by location
    #[serde(default)]
    pub tracks: BTreeMap<String, Vec<TrackRecord>>,

    /// Truth-link tables by location
    #[serde(default)]
    pub truth_links: BTreeMap<String, Vec<TruthLinkRecord>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EventFile {
    Many(Vec<EventRecord>),
    One(EventRecord),
}

impl MemoryEventStore {
    /// Build a store from one event record
    ///
    /// Every object receives a fresh identity.
    pub fn from_event(record: EventRecord) -> Result<Self, StoreError> {
        let mut store = Self::new();

        for (location, records) in record.tracks {
            let mut seen = HashSet::new();
            let mut objects = Vec::with_capacity(records.len());
            for track in records {
                if !seen.insert(track.key) {
                    return Err(StoreError::DuplicateKey {
                        location,
                        key: track.key,
                    });
                }
                objects.push(TrackedObject::new(track.key, IdentifierSet::new(track.ids)));
            }
            store.insert_tracks(TrackCollection::new(location, objects));
        }

        for (location, records) in record.truth_links {
            let Some(collection) = store.tracks.get(&location) else {
                warn!(
                    "Dropping {} truth link(s) at {}: no tracks at that location",
                    records.len(),
                    location
                );
                continue;
            };

            let mut links = MemoryTruthLinks::new();
            for link in records {
                let object = collection.by_key(link.key).ok_or_else(|| {
                    StoreError::UnknownObject {
                        location: location.clone(),
                        key: link.key,
                    }
                })?;
                if !(link.weight > 0.0 && link.weight <= 1.0) {
                    return Err(StoreError::InvalidWeight {
                        location,
                        key: link.key,
                        weight: link.weight,
                    });
                }
                links.add(TruthLink::new(
                    object.id,
                    ParticleId::from_value(link.particle as u128),
                    link.weight,
                ));
            }
            store.insert_truth_links(location, links);
        }

        Ok(store)
    }

    /// Build a store from a single JSON event
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let record: EventRecord = serde_json::from_str(json)?;
        Self::from_event(record)
    }
}

/// Parse JSON holding one event or an array of events
pub fn parse_events(json: &str) -> Result<Vec<MemoryEventStore>, StoreError> {
    let records = match serde_json::from_str(json)? {
        EventFile::Many(records) => records,
        EventFile::One(record) => vec![record],
    };
    records.into_iter().map(MemoryEventStore::from_event).collect()
}

/// Read and parse an event file
pub fn load_events<P: AsRef<Path>>(path: P) -> Result<Vec<MemoryEventStore>, StoreError> {
    let contents = std::fs::read_to_string(path)?;
    parse_events(&contents)
}
