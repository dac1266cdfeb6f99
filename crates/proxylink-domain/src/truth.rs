//! Links from tracked objects to ground-truth particles

use crate::{ObjectId, ParticleId};

/// A pre-existing, externally supplied link from a reference object to a truth particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruthLink {
    /// Linked object
    pub object: ObjectId,

    /// Truth particle
    pub particle: ParticleId,

    /// Link weight
    pub weight: f64,
}

impl TruthLink {
    /// Create a new truth link
    pub fn new(object: ObjectId, particle: ParticleId, weight: f64) -> Self {
        Self {
            object,
            particle,
            weight,
        }
    }
}

/// Inferred link for an unlinked object: one per (object, particle) pair
///
/// `weight` is the maximum combined weight over every derivation path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedTruthLink {
    /// Unlinked object
    pub object: ObjectId,

    /// Truth particle
    pub particle: ParticleId,

    /// Best combined weight
    pub weight: f64,
}
