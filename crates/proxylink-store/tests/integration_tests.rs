//! Integration tests for proxylink-store
//!
//! These tests verify loading event files from disk and reading them back
//! through the collaborator traits.

use proxylink_domain::traits::{EventStore, LinkSink, TruthLinkSource};
use proxylink_domain::{AggregatedTruthLink, ParticleId};
use proxylink_store::{
    load_events, EventRecord, LinkedOutput, MemoryEventStore, StoreError, TrackRecord,
};
use std::io::Write;

const EVENTS: &str = r#"[
    {
        "tracks": {
            "Rec/Track/Downstream": [ { "key": 0, "ids": [1, 2, 3, 4, 5] } ],
            "Rec/Track/Best": [ { "key": 3, "ids": [1, 2, 3, 4, 9] } ]
        },
        "truth_links": {
            "Rec/Track/Best": [ { "key": 3, "particle": 11, "weight": 1.0 } ]
        }
    },
    {
        "tracks": { "Rec/Track/Best": [] }
    }
]"#;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_event_file() {
    let file = write_temp(EVENTS);
    let events = load_events(file.path()).unwrap();
    assert_eq!(events.len(), 2, "Should load both events");

    let first = &events[0];
    let best = first.tracks("Rec/Track/Best").unwrap();
    let reference = best.by_key(3).unwrap();
    assert_eq!(reference.identifiers.len(), 5);

    let links = first.truth_links("Rec/Track/Best").unwrap().links_of(reference.id);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].particle, ParticleId::from_value(11));

    let second = &events[1];
    assert!(second.tracks("Rec/Track/Downstream").is_none());
    assert!(second.tracks("Rec/Track/Best").unwrap().is_empty());
    assert!(second.truth_links("Rec/Track/Best").is_none());
}

#[test]
fn test_missing_file() {
    let result = load_events("/nonexistent/events.json");
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[test]
fn test_objects_get_distinct_identities_per_load() {
    let file = write_temp(EVENTS);
    let a = load_events(file.path()).unwrap();
    let b = load_events(file.path()).unwrap();

    let id_a = a[0].tracks("Rec/Track/Best").unwrap().by_key(3).unwrap().id;
    let id_b = b[0].tracks("Rec/Track/Best").unwrap().by_key(3).unwrap().id;
    assert_ne!(id_a, id_b);
}

#[test]
fn test_from_record() {
    let mut record = EventRecord::default();
    record.tracks.insert(
        "In".to_string(),
        vec![TrackRecord { key: 7, ids: vec![3, 1, 2, 3] }],
    );

    let store = MemoryEventStore::from_event(record).unwrap();
    let object = store.tracks("In").unwrap().by_key(7).unwrap();
    assert_eq!(object.identifiers.codes(), &[1, 2, 3]);
    assert_eq!(store.key_of(object.id), Some(("In", 7)));
}

#[test]
fn test_output_sink_keyed_by_location() {
    let store = MemoryEventStore::from_json_str(
        r#"{ "tracks": { "In": [ { "key": 0, "ids": [1] } ] } }"#,
    )
    .unwrap();
    let object = store.tracks("In").unwrap().by_key(0).unwrap().id;

    let mut output = LinkedOutput::new();
    for (particle, weight) in [(1, 0.4), (2, 0.6)] {
        output
            .link(
                "In",
                AggregatedTruthLink {
                    object,
                    particle: ParticleId::from_value(particle),
                    weight,
                },
            )
            .unwrap();
    }

    assert_eq!(output.links_for("In", object).len(), 2);
    assert_eq!(output.locations().collect::<Vec<_>>(), vec!["In"]);
}
