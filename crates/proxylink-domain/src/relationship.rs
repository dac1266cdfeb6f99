//! Weighted relations between tracked objects

use crate::ObjectId;

/// Position of a reference collection in the configured location list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollectionIndex(pub usize);

/// A directed, weighted relation: `target` matches `source` with confidence `weight`
///
/// Relations are never symmetric. Each one carries the reference collection
/// its target was resolved to, so truth links can be looked up without
/// searching the collections again.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedRelation {
    /// Unlinked object
    pub source: ObjectId,

    /// Matched reference object
    pub target: ObjectId,

    /// Match confidence (0.0, 1.0]
    pub weight: f64,

    /// Collection the target belongs to
    pub origin: CollectionIndex,
}

impl WeightedRelation {
    /// Create a new relation
    ///
    /// # Panics
    /// Panics if weight is outside (0, 1]
    pub fn new(source: ObjectId, target: ObjectId, weight: f64, origin: CollectionIndex) -> Self {
        assert!(weight > 0.0 && weight <= 1.0, "Weight must be in (0, 1]");

        Self {
            source,
            target,
            weight,
            origin,
        }
    }
}
