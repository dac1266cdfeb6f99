//! Provenance of reference objects
//!
//! Maps every reference object to the collection it came from. When an object
//! appears in several configured collections the first-declared one wins.

use crate::{CollectionIndex, ObjectId, TrackCollection};
use std::collections::HashMap;

/// Lookup from reference object to its originating collection
#[derive(Debug, Clone, Default)]
pub struct ProvenanceIndex {
    origins: HashMap<ObjectId, CollectionIndex>,
    ambiguous: Vec<ObjectId>,
}

impl ProvenanceIndex {
    /// Build the index from collections given in declaration order
    pub fn build<'a, I>(collections: I) -> Self
    where
        I: IntoIterator<Item = (CollectionIndex, &'a TrackCollection)>,
    {
        let mut index = Self::default();
        for (origin, collection) in collections {
            for object in collection {
                match index.origins.get(&object.id) {
                    None => {
                        index.origins.insert(object.id, origin);
                    }
                    Some(first) if *first != origin => index.ambiguous.push(object.id),
                    Some(_) => {}
                }
            }
        }
        index
    }

    /// Collection a reference object resolves to
    pub fn resolve(&self, id: ObjectId) -> Option<CollectionIndex> {
        self.origins.get(&id).copied()
    }

    /// Objects found in more than one collection (resolved to the first)
    pub fn ambiguous(&self) -> &[ObjectId] {
        &self.ambiguous
    }

    /// Number of indexed objects
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// True if no object was indexed
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IdentifierSet, TrackedObject};

    #[test]
    fn test_first_declared_collection_wins() {
        let shared = TrackedObject::new(0, IdentifierSet::new([1, 2]));
        let only_b = TrackedObject::new(1, IdentifierSet::new([3, 4]));
        let a = TrackCollection::new("A", vec![shared.clone()]);
        let b = TrackCollection::new("B", vec![shared.clone(), only_b.clone()]);

        let index = ProvenanceIndex::build([(CollectionIndex(0), &a), (CollectionIndex(1), &b)]);

        assert_eq!(index.resolve(shared.id), Some(CollectionIndex(0)));
        assert_eq!(index.resolve(only_b.id), Some(CollectionIndex(1)));
        assert_eq!(index.ambiguous(), &[shared.id]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_unknown_object() {
        let index = ProvenanceIndex::default();
        assert!(index.resolve(ObjectId::from_value(7)).is_none());
        assert!(index.is_empty());
    }
}
