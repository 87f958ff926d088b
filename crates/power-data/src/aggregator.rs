//! Prefix filtering, summing and ranking of dump rows.

use std::cmp::Ordering;

use power_core::models::{PowerRecord, PowerReport};

// ── PowerAggregator ───────────────────────────────────────────────────────────

/// Accumulates the rows whose instance name starts with a hierarchy prefix.
///
/// The prefix match is a plain byte-wise `starts_with`: case-sensitive, no
/// normalisation of separators, no wildcards. An empty prefix matches every
/// row.
#[derive(Debug, Clone)]
pub struct PowerAggregator {
    prefix: String,
    records: Vec<PowerRecord>,
    total: f64,
}

impl PowerAggregator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            records: Vec::new(),
            total: 0.0,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Offer one data row. Returns `true` when the row matched the prefix and
    /// was added to the running total.
    pub fn add_row(&mut self, name: &str, power: f64) -> bool {
        if !name.starts_with(&self.prefix) {
            return false;
        }
        self.total += power;
        self.records.push(PowerRecord::new(name, power));
        true
    }

    /// Rows accepted so far.
    pub fn matched(&self) -> usize {
        self.records.len()
    }

    /// Running total of accepted rows, in watts.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Rank the accepted rows and hand them over as a [`PowerReport`].
    pub fn finish(self) -> PowerReport {
        let mut records = self.records;
        rank_records(&mut records);
        PowerReport {
            records,
            total: self.total,
        }
    }
}

/// Sort by power descending; equal powers fall back to name ascending.
///
/// Uses [`f64::total_cmp`] so a `nan` power column cannot break the sort.
pub fn rank_records(records: &mut [PowerRecord]) {
    records.sort_by(compare_ranked);
}

fn compare_ranked(a: &PowerRecord, b: &PowerRecord) -> Ordering {
    b.power
        .total_cmp(&a.power)
        .then_with(|| a.name.cmp(&b.name))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
