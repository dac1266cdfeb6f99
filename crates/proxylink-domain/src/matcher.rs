//! Identifier-overlap scoring between an unlinked and a reference object

use crate::TrackedObject;

/// Fraction of the unlinked object's identifiers also found on the reference object
///
/// The denominator is the unlinked object's identifier count, so the score is
/// asymmetric. An unlinked object without identifiers scores 0.0.
///
/// # Examples
///
/// ```
/// use proxylink_domain::{IdentifierSet, TrackedObject, matcher};
///
/// let unlinked = TrackedObject::new(0, IdentifierSet::new(0..10));
/// let reference = TrackedObject::new(0, IdentifierSet::new(2..30));
/// assert_eq!(matcher::score(&unlinked, &reference), 0.8);
/// ```
pub fn score(unlinked: &TrackedObject, reference: &TrackedObject) -> f64 {
    let total = unlinked.identifiers.len();
    if total == 0 {
        return 0.0;
    }
    let common = unlinked.identifiers.common_count(&reference.identifiers);
    common as f64 / total as f64
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::IdentifierSet;
    use proptest::prelude::*;

    proptest! {
        /// Property: score always lies in [0, 1]
        #[test]
        fn test_score_range(
            a in proptest::collection::vec(0u32..100, 0..50),
            b in proptest::collection::vec(0u32..100, 0..50),
        ) {
            let s = score(
                &TrackedObject::new(0, IdentifierSet::new(a)),
                &TrackedObject::new(1, IdentifierSet::new(b)),
            );
            prop_assert!((0.0..=1.0).contains(&s));
        }

        /// Property: an object always fully matches itself
        #[test]
        fn test_self_match(a in proptest::collection::vec(0u32..100, 1..50)) {
            let o = TrackedObject::new(0, IdentifierSet::new(a));
            prop_assert_eq!(score(&o, &o), 1.0);
        }
    }
}
