//! Indexed, multi-valued store of weighted relations

use crate::{CollectionIndex, ObjectId, WeightedRelation};
use std::collections::HashMap;

/// Write-once, read-many table of relations keyed by source object
///
/// Duplicate relations are kept as inserted; nothing is merged on insert.
/// Relations for a source come back in insertion order.
#[derive(Debug, Clone, Default)]
pub struct WeightedRelationTable {
    by_source: HashMap<ObjectId, Vec<WeightedRelation>>,
    total: usize,
}

impl WeightedRelationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table sized for roughly `sources` distinct sources
    pub fn with_capacity(sources: usize) -> Self {
        Self {
            by_source: HashMap::with_capacity(sources),
            total: 0,
        }
    }

    /// Insert one relation `source -> target` with `weight`, tagged with its origin
    pub fn relate(
        &mut self,
        source: ObjectId,
        target: ObjectId,
        weight: f64,
        origin: CollectionIndex,
    ) {
        self.insert(WeightedRelation::new(source, target, weight, origin));
    }

    /// Insert an already-built relation
    pub fn insert(&mut self, relation: WeightedRelation) {
        self.by_source.entry(relation.source).or_default().push(relation);
        self.total += 1;
    }

    /// All relations whose source is `source`, in insertion order
    pub fn relations_of(&self, source: ObjectId) -> &[WeightedRelation] {
        self.by_source
            .get(&source)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of relations for `source`
    pub fn count_of(&self, source: ObjectId) -> usize {
        self.relations_of(source).len()
    }

    /// Number of distinct sources with at least one relation
    pub fn source_count(&self) -> usize {
        self.by_source.len()
    }

    /// Total number of relations
    pub fn len(&self) -> usize {
        self.total
    }

    /// True if no relation was inserted
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: u128) -> ObjectId {
        ObjectId::from_value(v)
    }

    #[test]
    fn test_empty_source_returns_empty_slice() {
        let table = WeightedRelationTable::with_capacity(100);
        assert!(table.relations_of(id(1)).is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut table = WeightedRelationTable::new();
        table.relate(id(1), id(10), 0.9, CollectionIndex(0));
        table.relate(id(1), id(11), 0.7, CollectionIndex(1));
        table.relate(id(2), id(10), 0.8, CollectionIndex(0));

        let targets: Vec<_> = table.relations_of(id(1)).iter().map(|r| r.target).collect();
        assert_eq!(targets, vec![id(10), id(11)]);
        assert_eq!(table.count_of(id(2)), 1);
        assert_eq!(table.source_count(), 2);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_duplicates_are_not_merged() {
        let mut table = WeightedRelationTable::new();
        table.relate(id(1), id(10), 0.9, CollectionIndex(0));
        table.relate(id(1), id(10), 0.9, CollectionIndex(0));

        assert_eq!(table.count_of(id(1)), 2);
    }
}
