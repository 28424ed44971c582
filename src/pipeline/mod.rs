//! Map, combine, and reduce stages over scanner emissions.
//!
//! The map stage turns one line into `(key, aggregate)` emissions, one per
//! match with a count of one. Combining folds emissions for the same key,
//! and because the fold is associative and commutative it may run zero, one,
//! or many times at any granularity before the final reduce without
//! changing the resulting averages.

pub mod parallel;

use crate::core::{KeyAverage, PartialAggregate, TagPair};
use crate::scan::TagScanner;
use std::collections::HashMap;

pub use parallel::aggregate_lines;

/// Per-key partial aggregates, the unit the combiner and reducer fold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateMap {
    entries: HashMap<String, PartialAggregate>,
}

impl AggregateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one emission into the map.
    pub fn add(&mut self, key: &str, value: PartialAggregate) {
        if let Some(existing) = self.entries.get_mut(key) {
            existing.merge(value);
        } else {
            self.entries.insert(key.to_string(), value);
        }
    }

    /// Combine another map into this one, key by key.
    ///
    /// This is the combiner and the reducer fold; merging maps built from
    /// disjoint partitions in any order yields the same result as folding
    /// the whole input directly.
    pub fn merge(mut self, other: Self) -> Self {
        for (key, value) in other.entries {
            self.entries
                .entry(key)
                .or_insert_with(PartialAggregate::identity)
                .merge(value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&PartialAggregate> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PartialAggregate)> {
        self.entries.iter()
    }

    /// The entries in lexicographic key order, for reproducible output.
    pub fn sorted_entries(&self) -> Vec<(String, PartialAggregate)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Reduce to final `(key, average)` rows, sorted by key.
    ///
    /// A zero-count aggregate cannot come from the scanner, only from
    /// hand-crafted intermediate input; such keys are skipped with a
    /// warning instead of producing NaN rows.
    pub fn into_averages(self) -> Vec<KeyAverage> {
        let mut averages: Vec<KeyAverage> = self
            .entries
            .into_iter()
            .filter_map(|(key, agg)| match agg.average() {
                Some(average) => Some(KeyAverage::new(key, average)),
                None => {
                    log::warn!("key {key} has no matches, skipping");
                    None
                }
            })
            .collect();
        averages.sort_by(|a, b| a.key.cmp(&b.key));
        averages
    }
}

impl FromIterator<(String, PartialAggregate)> for AggregateMap {
    fn from_iter<I: IntoIterator<Item = (String, PartialAggregate)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.add(&key, value);
        }
        map
    }
}

/// Scan one line against every tag pair and yield one emission per match.
///
/// This is the map stage: each emission carries the pair's key and an
/// aggregate of one distance with a count of one.
pub fn emit_line<'a>(
    line: &'a str,
    pairs: &'a [TagPair],
) -> impl Iterator<Item = (String, PartialAggregate)> + 'a {
    pairs.iter().flat_map(move |pair| {
        let key = pair.key();
        TagScanner::new(line, pair)
            .map(move |m| (key.clone(), PartialAggregate::from_distance(m.distance)))
    })
}

/// Scan one line and fold its emissions straight into `acc`.
pub fn map_line(line: &str, pairs: &[TagPair], acc: &mut AggregateMap) {
    for (key, value) in emit_line(line, pairs) {
        acc.add(&key, value);
    }
}
