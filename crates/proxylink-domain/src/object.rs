//! Tracked objects - the entities being associated

use std::fmt;

/// Identity of a tracked object, based on UUIDv7
///
/// Two objects are the same object if and only if their ids are equal.
/// Identifier-set contents never participate in identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u128);

impl ObjectId {
    /// Generate a fresh UUIDv7-based ObjectId
    ///
    /// # Examples
    ///
    /// ```
    /// use proxylink_domain::ObjectId;
    ///
    /// let a = ObjectId::new();
    /// let b = ObjectId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an ObjectId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Opaque identity of a ground-truth particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(u128);

impl ParticleId {
    /// Create a ParticleId from a raw value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mcp:{}", self.0)
    }
}

/// The discrete identifier codes making up a tracked object
///
/// Stored sorted and de-duplicated so overlap counting is a single merge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSet {
    codes: Vec<u32>,
}

impl IdentifierSet {
    /// Build a set from arbitrary codes (order and duplicates are irrelevant)
    pub fn new(codes: impl IntoIterator<Item = u32>) -> Self {
        let mut codes: Vec<u32> = codes.into_iter().collect();
        codes.sort_unstable();
        codes.dedup();
        Self { codes }
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the set holds no identifiers
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Sorted identifier codes
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    /// Count identifiers present in both sets
    ///
    /// # Examples
    ///
    /// ```
    /// use proxylink_domain::IdentifierSet;
    ///
    /// let a = IdentifierSet::new([1, 2, 3, 4]);
    /// let b = IdentifierSet::new([3, 4, 5]);
    /// assert_eq!(a.common_count(&b), 2);
    /// ```
    pub fn common_count(&self, other: &IdentifierSet) -> usize {
        let (mut i, mut j, mut common) = (0, 0, 0);
        while i < self.codes.len() && j < other.codes.len() {
            match self.codes[i].cmp(&other.codes[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    common += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        common
    }
}

impl FromIterator<u32> for IdentifierSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A tracked object, either unlinked or a reference object
///
/// Objects are immutable for the duration of an association pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedObject {
    /// Identity
    pub id: ObjectId,

    /// Position key within the owning keyed container
    pub key: u32,

    /// Identifier codes used for overlap scoring
    pub identifiers: IdentifierSet,
}

impl TrackedObject {
    /// Create a tracked object with a fresh identity
    pub fn new(key: u32, identifiers: IdentifierSet) -> Self {
        Self {
            id: ObjectId::new(),
            key,
            identifiers,
        }
    }

    /// Create a tracked object with an explicit identity
    pub fn with_id(id: ObjectId, key: u32, identifiers: IdentifierSet) -> Self {
        Self { id, key, identifiers }
    }
}

/// A named, ordered sequence of tracked objects
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackCollection {
    /// Location key the collection was retrieved from
    pub location: String,

    /// Objects in container order
    pub objects: Vec<TrackedObject>,
}

impl TrackCollection {
    /// Create a collection at a location
    pub fn new(location: impl Into<String>, objects: Vec<TrackedObject>) -> Self {
        Self {
            location: location.into(),
            objects,
        }
    }

    /// Look up an object by its container key
    pub fn by_key(&self, key: u32) -> Option<&TrackedObject> {
        self.objects.iter().find(|o| o.key == key)
    }

    /// Iterate objects in container order
    pub fn iter(&self) -> std::slice::Iter<'_, TrackedObject> {
        self.objects.iter()
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if the collection holds no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<'a> IntoIterator for &'a TrackCollection {
    type Item = &'a TrackedObject;
    type IntoIter = std::slice::Iter<'a, TrackedObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
