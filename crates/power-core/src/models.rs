use serde::Serialize;

/// One matched instance row from a power dump.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerRecord {
    /// Full hierarchical instance name, e.g. `i_croc_soc/i_croc/i_pulser/u_ctr`.
    pub name: String,
    /// Total power in watts, taken from the fourth column of the row.
    pub power: f64,
}

impl PowerRecord {
    pub fn new(name: impl Into<String>, power: f64) -> Self {
        Self {
            name: name.into(),
            power,
        }
    }
}

/// Ranked result of one scan over a dump.
///
/// `total` is the sum over every record, not only the ones a reporter
/// chooses to show.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PowerReport {
    /// Matched records, sorted by power descending then name ascending.
    pub records: Vec<PowerRecord>,
    /// Sum of `power` across `records`, in watts.
    pub total: f64,
}

impl PowerReport {
    /// The `n` largest consumers, or all of them when fewer exist.
    pub fn top(&self, n: usize) -> &[PowerRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Number of matched instances.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Counters gathered while scanning a dump.
///
/// Purely diagnostic: nothing here feeds back into [`PowerReport`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: u64,
    pub blank: u64,
    pub separators: u64,
    pub headers: u64,
    pub malformed: u64,
    pub data_rows: u64,
    pub matched: u64,
}

impl ParseStats {
    /// Lines that did not contribute a data row.
    pub fn skipped(&self) -> u64 {
        self.blank + self.separators + self.headers + self.malformed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> PowerReport {
        PowerReport {
            records: vec![
                PowerRecord::new("i_core/u_c", 5.5),
                PowerRecord::new("i_core/u_a", 4.0),
                PowerRecord::new("i_core/u_b", 1.0),
            ],
            total: 10.5,
        }
    }

    #[test]
    fn test_top_truncates() {
        let report = sample_report();
        let top = report.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "i_core/u_c");
        assert_eq!(top[1].name, "i_core/u_a");
    }

    #[test]
    fn test_top_larger_than_len_returns_all() {
        let report = sample_report();
        assert_eq!(report.top(20).len(), 3);
    }

    #[test]
    fn test_top_zero_is_empty() {
        assert!(sample_report().top(0).is_empty());
    }

    #[test]
    fn test_default_report_is_empty() {
        let report = PowerReport::default();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.total, 0.0);
        assert!(report.top(5).is_empty());
    }

    #[test]
    fn test_parse_stats_skipped() {
        let stats = ParseStats {
            lines: 10,
            blank: 2,
            separators: 3,
            headers: 1,
            malformed: 1,
            data_rows: 3,
            matched: 2,
        };
        assert_eq!(stats.skipped(), 7);
        assert_eq!(stats.skipped() + stats.data_rows, stats.lines);
    }

    #[test]
    fn test_record_serializes_to_json() {
        let record = PowerRecord::new("top/u_x", 1.25e-3);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "top/u_x");
        assert_eq!(value["power"], 1.25e-3);
    }
}
