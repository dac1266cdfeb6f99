//! Truth propagation engine: overlap matching followed by weight propagation

use crate::{AssociatorConfig, AssociatorError, AssociatorMetrics};
use proxylink_domain::traits::{EventStore, LinkSink, TruthLinkSource};
use proxylink_domain::{
    matcher, AggregatedTruthLink, CollectionIndex, ParticleId, ProvenanceIndex, TrackCollection,
    WeightedRelationTable,
};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Capacity hint for the per-invocation relation table
const RELATION_TABLE_CAPACITY: usize = 100;

/// One usable reference location: its objects and their truth links
#[derive(Clone, Copy)]
pub struct ReferenceInput<'a> {
    /// Position of the location in `LinkedTracks`
    pub origin: CollectionIndex,

    /// Reference objects
    pub tracks: &'a TrackCollection,

    /// Truth links of the reference objects
    pub links: &'a dyn TruthLinkSource,
}

impl<'a> ReferenceInput<'a> {
    /// Pair a collection with its truth links
    pub fn new(
        origin: CollectionIndex,
        tracks: &'a TrackCollection,
        links: &'a dyn TruthLinkSource,
    ) -> Self {
        Self {
            origin,
            tracks,
            links,
        }
    }
}

/// Result of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationOutcome {
    /// The algorithm ran
    Linked {
        /// Input objects considered
        inputs: usize,
        /// Input objects with at least one match
        matched: usize,
        /// Links written to the sink
        links: usize,
    },

    /// No input collection at the configured location; nothing was done
    MissingInput,

    /// No reference location had both objects and truth links; nothing was done
    NoUsableReferences,
}

/// Infers truth links for unlinked objects through matching reference objects
///
/// The result is a greedy, per-object approximation. It is not a global
/// assignment and should not be used for rigorous efficiency or fake-rate
/// studies, especially when object-to-object matching is not fully efficient.
///
/// # Examples
///
/// ```
/// use proxylink_associator::{AssociatorConfig, TruthPropagationEngine};
///
/// let config = AssociatorConfig::for_input("Rec/Track/Downstream");
/// let engine = TruthPropagationEngine::new(config).unwrap();
/// assert_eq!(engine.metrics().events_processed, 0);
/// ```
pub struct TruthPropagationEngine {
    config: AssociatorConfig,
    metrics: AssociatorMetrics,
}

impl TruthPropagationEngine {
    /// Create an engine, rejecting unusable configuration
    pub fn new(config: AssociatorConfig) -> Result<Self, AssociatorError> {
        config.validate()?;
        Ok(Self {
            config,
            metrics: AssociatorMetrics::new(),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &AssociatorConfig {
        &self.config
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &AssociatorMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Process one event
    ///
    /// Reads the input and reference collections from `store`, runs both
    /// stages and writes every inferred link to `sink` under the input
    /// location. Missing data is logged and degrades to fewer (or no) links;
    /// only a sink failure returns an error.
    pub fn execute<S, K>(
        &mut self,
        store: &S,
        sink: &mut K,
    ) -> Result<AssociationOutcome, AssociatorError>
    where
        S: EventStore,
        K: LinkSink,
        K::Error: std::fmt::Display,
    {
        self.metrics.record_event();
        let input_location = self.config.input_tracks.clone();

        let Some(inputs) = store.tracks(&input_location) else {
            warn!("No tracks at {}!", input_location);
            self.metrics.record_missing_input();
            return Ok(AssociationOutcome::MissingInput);
        };

        // Owns every truth-link source opened for this event; released on return.
        let mut opened: Vec<(CollectionIndex, &TrackCollection, Box<dyn TruthLinkSource + '_>)> =
            Vec::with_capacity(self.config.linked_tracks.len());

        for (position, location) in self.config.linked_tracks.iter().enumerate() {
            let Some(links) = store.truth_links(location) else {
                warn!("MC links for tracks at {} not found!", location);
                self.metrics.record_missing_reference();
                continue;
            };
            let Some(tracks) = store.tracks(location) else {
                warn!("No tracks at {}!", location);
                self.metrics.record_missing_reference();
                continue;
            };
            opened.push((CollectionIndex(position), tracks, links));
        }

        if opened.is_empty() {
            warn!("Didn't find any tracks with MC links!");
            self.metrics.record_no_references();
            return Ok(AssociationOutcome::NoUsableReferences);
        }

        let references: Vec<ReferenceInput<'_>> = opened
            .iter()
            .map(|(origin, tracks, links)| ReferenceInput::new(*origin, tracks, &**links))
            .collect();

        let table = self.build_relations(inputs, &references);
        let links = self.propagate(inputs, &table, &references);

        for link in &links {
            sink.link(&input_location, *link)
                .map_err(|e| AssociatorError::Sink(e.to_string()))?;
        }

        debug!(
            "Linked {} of {} objects at {} to {} particles",
            table.source_count(),
            inputs.len(),
            input_location,
            links.len()
        );

        Ok(AssociationOutcome::Linked {
            inputs: inputs.len(),
            matched: table.source_count(),
            links: links.len(),
        })
    }

    /// Run both stages over already-resolved collections
    pub fn run(
        &mut self,
        unlinked: &TrackCollection,
        references: &[ReferenceInput<'_>],
    ) -> Vec<AggregatedTruthLink> {
        let table = self.build_relations(unlinked, references);
        self.propagate(unlinked, &table, references)
    }

    /// Stage 1: relate every unlinked object to every reference object it overlaps enough
    ///
    /// Each relation is tagged with the first-declared collection containing
    /// its target.
    pub fn build_relations(
        &mut self,
        unlinked: &TrackCollection,
        references: &[ReferenceInput<'_>],
    ) -> WeightedRelationTable {
        let provenance = ProvenanceIndex::build(references.iter().map(|r| (r.origin, r.tracks)));
        for id in provenance.ambiguous() {
            debug!(
                "Reference object {} found in several collections, using {:?}",
                id,
                provenance.resolve(*id)
            );
        }

        let threshold = self.config.track_match_frac;
        let mut table = WeightedRelationTable::with_capacity(RELATION_TABLE_CAPACITY);

        for input in unlinked {
            if input.identifiers.is_empty() {
                debug!(
                    "Object {} at {} has no identifiers, skipping",
                    input.key, unlinked.location
                );
                self.metrics.record_degenerate_input();
                self.metrics.record_matches(0);
                continue;
            }

            let mut matched = 0;
            for reference in references {
                for candidate in reference.tracks {
                    let fraction = matcher::score(input, candidate);
                    if fraction < threshold {
                        continue;
                    }
                    let origin = provenance.resolve(candidate.id).unwrap_or(reference.origin);
                    table.relate(input.id, candidate.id, fraction, origin);
                    self.metrics.record_match_fraction(fraction);
                    matched += 1;
                }
            }
            self.metrics.record_matches(matched);
        }

        table
    }

    /// Stage 2: push the matched reference objects' truth links onto each unlinked object
    ///
    /// The weight of a path is `relation weight * truth-link weight`; when
    /// several paths reach the same particle the largest weight is kept.
    /// Output is grouped by unlinked object in input order, then by particle.
    pub fn propagate(
        &mut self,
        unlinked: &TrackCollection,
        table: &WeightedRelationTable,
        references: &[ReferenceInput<'_>],
    ) -> Vec<AggregatedTruthLink> {
        let sources: HashMap<CollectionIndex, &dyn TruthLinkSource> =
            references.iter().map(|r| (r.origin, r.links)).collect();

        let mut output = Vec::new();
        for input in unlinked {
            let mut best: BTreeMap<ParticleId, f64> = BTreeMap::new();

            for relation in table.relations_of(input.id) {
                let Some(source) = sources.get(&relation.origin) else {
                    debug!("No truth links for collection {:?}", relation.origin);
                    continue;
                };
                for link in source.links_of(relation.target) {
                    let combined = relation.weight * link.weight;
                    best.entry(link.particle)
                        .and_modify(|w| *w = w.max(combined))
                        .or_insert(combined);
                }
            }

            self.metrics.record_particles(best.len());
            for (particle, weight) in best {
                self.metrics.record_link_weight(weight);
                output.push(AggregatedTruthLink {
                    object: input.id,
                    particle,
                    weight,
                });
            }
        }

        output
    }
}
