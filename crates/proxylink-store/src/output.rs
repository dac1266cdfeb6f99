//! Collected output links

use proxylink_domain::traits::LinkSink;
use proxylink_domain::{AggregatedTruthLink, ObjectId};
use std::collections::BTreeMap;
use std::convert::Infallible;

/// Inferred links keyed by the location of the linked objects
///
/// An object may carry any number of links, each with its own weight.
#[derive(Debug, Clone, Default)]
pub struct LinkedOutput {
    links: BTreeMap<String, Vec<AggregatedTruthLink>>,
}

impl LinkedOutput {
    /// Create an empty output
    pub fn new() -> Self {
        Self::default()
    }

    /// All links written for `location`, in write order
    pub fn links_at(&self, location: &str) -> &[AggregatedTruthLink] {
        self.links.get(location).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Links of a single object at `location`
    pub fn links_for(&self, location: &str, object: ObjectId) -> Vec<AggregatedTruthLink> {
        self.links_at(location)
            .iter()
            .filter(|link| link.object == object)
            .copied()
            .collect()
    }

    /// Locations that received links, sorted
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// Total number of links across locations
    pub fn total(&self) -> usize {
        self.links.values().map(Vec::len).sum()
    }

    /// True if nothing was written
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Drop every link
    pub fn clear(&mut self) {
        self.links.clear();
    }
}

impl LinkSink for LinkedOutput {
    type Error = Infallible;

    fn link(&mut self, location: &str, link: AggregatedTruthLink) -> Result<(), Self::Error> {
        self.links.entry(location.to_string()).or_default().push(link);
        Ok(())
    }
}
