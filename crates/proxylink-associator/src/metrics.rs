//! Counters collected across association runs

use std::collections::BTreeMap;

/// Running statistics over a stream of values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Counter {
    /// Number of values added
    pub entries: u64,

    /// Sum of values
    pub sum: f64,

    /// Sum of squared values
    pub sum2: f64,

    /// Smallest value seen (0.0 while empty)
    pub min: f64,

    /// Largest value seen (0.0 while empty)
    pub max: f64,
}

impl Counter {
    /// Add one value
    pub fn add(&mut self, value: f64) {
        if self.entries == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.entries += 1;
        self.sum += value;
        self.sum2 += value * value;
    }

    /// Mean of the values, 0.0 if empty
    pub fn mean(&self) -> f64 {
        if self.entries == 0 {
            return 0.0;
        }
        self.sum / self.entries as f64
    }

    /// Spread of the values around the mean, 0.0 if empty
    pub fn rms(&self) -> f64 {
        if self.entries == 0 {
            return 0.0;
        }
        let mean = self.mean();
        (self.sum2 / self.entries as f64 - mean * mean).max(0.0).sqrt()
    }

    fn line(&self, name: &str) -> String {
        format!(
            "  {:<36} entries={:<8} sum={:<10.4} mean={:<8.4} rms={:<8.4} min={:<8.4} max={:.4}",
            name,
            self.entries,
            self.sum,
            self.mean(),
            self.rms(),
            self.min,
            self.max
        )
    }
}

/// Metrics collected by the truth propagation engine
///
/// Accumulates over every invocation until [`AssociatorMetrics::reset`].
/// These are observability data only and never feed back into the algorithm.
#[derive(Debug, Clone, Default)]
pub struct AssociatorMetrics {
    /// 1.0 per input object with at least one match, 0.0 otherwise
    pub linked_tracks: Counter,

    /// Number of matched reference objects per input object
    pub matches_per_input: Counter,

    /// Match count -> number of input objects with that many matches
    pub match_count_histogram: BTreeMap<usize, usize>,

    /// Accepted stage-1 match fractions
    pub match_fractions: Counter,

    /// Distinct truth particles linked per input object
    pub particles_per_input: Counter,

    /// Emitted aggregated link weights
    pub link_weights: Counter,

    /// Invocations started
    pub events_processed: usize,

    /// Invocations skipped because the input collection was absent
    pub missing_input_events: usize,

    /// Invocations skipped because no reference location was usable
    pub no_reference_events: usize,

    /// Reference locations excluded for missing tracks or truth links
    pub missing_reference_locations: usize,

    /// Input objects without identifiers
    pub degenerate_inputs: usize,
}

impl AssociatorMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of an invocation
    pub fn record_event(&mut self) {
        self.events_processed += 1;
    }

    /// Record an invocation without input objects
    pub fn record_missing_input(&mut self) {
        self.missing_input_events += 1;
    }

    /// Record a reference location that had to be excluded
    pub fn record_missing_reference(&mut self) {
        self.missing_reference_locations += 1;
    }

    /// Record an invocation without any usable reference location
    pub fn record_no_references(&mut self) {
        self.no_reference_events += 1;
    }

    /// Record an input object without identifiers
    pub fn record_degenerate_input(&mut self) {
        self.degenerate_inputs += 1;
    }

    /// Record the stage-1 match count of one input object
    pub fn record_matches(&mut self, count: usize) {
        self.linked_tracks.add(if count > 0 { 1.0 } else { 0.0 });
        self.matches_per_input.add(count as f64);
        *self.match_count_histogram.entry(count).or_insert(0) += 1;
    }

    /// Record one accepted match fraction
    pub fn record_match_fraction(&mut self, fraction: f64) {
        self.match_fractions.add(fraction);
    }

    /// Record the number of distinct particles linked to one input object
    pub fn record_particles(&mut self, count: usize) {
        self.particles_per_input.add(count as f64);
    }

    /// Record one emitted link weight
    pub fn record_link_weight(&mut self, weight: f64) {
        self.link_weights.add(weight);
    }

    /// Number of input objects with at least one match
    pub fn total_linked(&self) -> u64 {
        self.linked_tracks.sum as u64
    }

    /// Number of links emitted
    pub fn total_links(&self) -> u64 {
        self.link_weights.entries
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Association Metrics Summary".to_string(),
            "===========================".to_string(),
            format!("Events processed: {}", self.events_processed),
            format!("Events without input: {}", self.missing_input_events),
            format!("Events without references: {}", self.no_reference_events),
            format!("Missing reference locations: {}", self.missing_reference_locations),
            format!("Inputs without identifiers: {}", self.degenerate_inputs),
            String::new(),
            "Counters:".to_string(),
            self.linked_tracks.line("Linked tracks"),
            self.matches_per_input.line("N. track matches per input track"),
            self.match_fractions.line("Track match fractions"),
            self.particles_per_input.line("N. MCParticle links per input track"),
            self.link_weights.line("MCParticle match fractions"),
        ];

        if !self.match_count_histogram.is_empty() {
            lines.push(String::new());
            lines.push("Matches per input:".to_string());
            for (count, inputs) in &self.match_count_histogram {
                lines.push(format!("  {}: {}", count, inputs));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_statistics() {
        let mut counter = Counter::default();
        counter.add(2.0);
        counter.add(4.0);
        counter.add(6.0);

        assert_eq!(counter.entries, 3);
        assert_eq!(counter.sum, 12.0);
        assert_eq!(counter.mean(), 4.0);
        assert_eq!(counter.min, 2.0);
        assert_eq!(counter.max, 6.0);
        assert!((counter.rms() - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_counter() {
        let counter = Counter::default();
        assert_eq!(counter.mean(), 0.0);
        assert_eq!(counter.rms(), 0.0);
    }

    #[test]
    fn test_record_matches() {
        let mut metrics = AssociatorMetrics::new();
        metrics.record_matches(2);
        metrics.record_matches(0);
        metrics.record_matches(2);

        assert_eq!(metrics.total_linked(), 2);
        assert_eq!(metrics.linked_tracks.entries, 3);
        assert_eq!(metrics.matches_per_input.sum, 4.0);
        assert_eq!(metrics.match_count_histogram.get(&2), Some(&2));
        assert_eq!(metrics.match_count_histogram.get(&0), Some(&1));
    }

    #[test]
    fn test_reset() {
        let mut metrics = AssociatorMetrics::new();
        metrics.record_event();
        metrics.record_link_weight(0.5);
        metrics.record_matches(1);

        metrics.reset();

        assert_eq!(metrics.events_processed, 0);
        assert_eq!(metrics.total_links(), 0);
        assert!(metrics.match_count_histogram.is_empty());
    }

    #[test]
    fn test_summary() {
        let mut metrics = AssociatorMetrics::new();
        metrics.record_event();
        metrics.record_missing_input();
        metrics.record_matches(3);
        metrics.record_link_weight(0.63);

        let summary = metrics.summary();
        assert!(summary.contains("Events processed: 1"));
        assert!(summary.contains("Events without input: 1"));
        assert!(summary.contains("Linked tracks"));
        assert!(summary.contains("MCParticle match fractions"));
        assert!(summary.contains("  3: 1"));
    }
}
