//! Machine-readable rendering of a report.

use serde::Serialize;

use power_core::error::Result;
use power_core::models::{PowerRecord, PowerReport};

use crate::text::shown_rows;

/// JSON document emitted by `--format json`.
#[derive(Debug, Serialize)]
pub struct JsonSummary<'a> {
    pub prefix: &'a str,
    pub source: &'a str,
    /// Sum over every matched instance, not only the listed ones.
    pub total_w: f64,
    pub matched: usize,
    pub top: &'a [PowerRecord],
}

impl<'a> JsonSummary<'a> {
    pub fn new(report: &'a PowerReport, prefix: &'a str, source: &'a str, top_n: i64) -> Self {
        Self {
            prefix,
            source,
            total_w: report.total,
            matched: report.len(),
            top: report.top(shown_rows(report, top_n)),
        }
    }
}

/// Render `report` as pretty-printed JSON, listing at most `top_n` instances.
pub fn render_json(report: &PowerReport, prefix: &str, source_label: &str, top_n: i64) -> Result<String> {
    let summary = JsonSummary::new(report, prefix, source_label, top_n);
    Ok(serde_json::to_string_pretty(&summary)?)
}
