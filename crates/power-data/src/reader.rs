//! Power dump loading and line classification.
//!
//! Reads the flat text written by `report_power > file` in a single pass and
//! feeds every data row into a [`PowerAggregator`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use power_core::error::{PowerError, Result};
use power_core::models::{ParseStats, PowerReport};
use tracing::debug;

use crate::aggregator::PowerAggregator;

/// A data row needs at least this many whitespace-separated columns.
const MIN_DATA_COLUMNS: usize = 5;
/// Zero-based column holding the total power figure.
const POWER_COLUMN: usize = 3;
/// Zero-based column holding the instance name.
const NAME_COLUMN: usize = 4;

// ── DumpLine ──────────────────────────────────────────────────────────────────

/// Classification of one line of a power dump.
///
/// Only [`DumpLine::Data`] contributes to a report. Classification is
/// stateless: a row is data when it has at least five columns and its first
/// column is a number, whatever section it sits in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DumpLine<'a> {
    /// Empty or whitespace only.
    Blank,
    /// A rule made of `-`, `=`, `_`, `+` or `|`.
    Separator,
    /// Column labels, group summaries (`Sequential`, `Total`, ...) and any
    /// other text that is not a data row.
    Header,
    /// Numeric first column but the power column does not parse.
    Malformed,
    /// A row contributing `power` watts for instance `name`.
    Data { power: f64, name: &'a str },
}

/// Classify a single dump line.
pub fn classify_line(line: &str) -> DumpLine<'_> {
    let cols: Vec<&str> = line.split_whitespace().collect();
    if cols.is_empty() {
        return DumpLine::Blank;
    }

    if cols.len() < MIN_DATA_COLUMNS || !is_numeric(cols[0]) {
        return if is_separator(line) {
            DumpLine::Separator
        } else {
            DumpLine::Header
        };
    }

    match cols[POWER_COLUMN].parse::<f64>() {
        Ok(power) => DumpLine::Data {
            power,
            name: cols[NAME_COLUMN],
        },
        Err(_) => DumpLine::Malformed,
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Scan already-split lines and collect every row under `prefix`.
pub fn parse_lines<I, S>(lines: I, prefix: &str) -> (PowerReport, ParseStats)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scan = DumpScan::new(prefix);
    for line in lines {
        scan.push(line.as_ref());
    }
    scan.finish()
}

/// Scan a buffered reader line by line.
///
/// Read failures, including invalid UTF-8, are returned as
/// [`PowerError::Io`]; malformed rows are skipped.
pub fn parse_reader<R: BufRead>(reader: R, prefix: &str) -> Result<(PowerReport, ParseStats)> {
    let mut scan = DumpScan::new(prefix);
    for line in reader.lines() {
        scan.push(&line?);
    }
    Ok(scan.finish())
}

/// Open the dump at `path` and scan it.
///
/// Existence is the caller's concern; a path that cannot be opened here is
/// reported as [`PowerError::FileRead`].
pub fn load_dump(path: &Path, prefix: &str) -> Result<(PowerReport, ParseStats)> {
    let file = File::open(path).map_err(|source| PowerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let (report, stats) = parse_reader(BufReader::new(file), prefix)?;

    debug!(
        "File {}: {} lines, {} data rows, {} matched, {} skipped ({} blank, {} separators, {} headers, {} malformed)",
        path.display(),
        stats.lines,
        stats.data_rows,
        stats.matched,
        stats.skipped(),
        stats.blank,
        stats.separators,
        stats.headers,
        stats.malformed,
    );

    Ok((report, stats))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// One in-progress scan: the aggregator plus the line counters.
struct DumpScan {
    aggregator: PowerAggregator,
    stats: ParseStats,
}

impl DumpScan {
    fn new(prefix: &str) -> Self {
        Self {
            aggregator: PowerAggregator::new(prefix),
            stats: ParseStats::default(),
        }
    }

    fn push(&mut self, line: &str) {
        self.stats.lines += 1;
        match classify_line(line) {
            DumpLine::Blank => self.stats.blank += 1,
            DumpLine::Separator => self.stats.separators += 1,
            DumpLine::Header => self.stats.headers += 1,
            DumpLine::Malformed => self.stats.malformed += 1,
            DumpLine::Data { power, name } => {
                self.stats.data_rows += 1;
                if self.aggregator.add_row(name, power) {
                    self.stats.matched += 1;
                }
            }
        }
    }

    fn finish(self) -> (PowerReport, ParseStats) {
        (self.aggregator.finish(), self.stats)
    }
}

fn is_numeric(token: &str) -> bool {
    token.parse::<f64>().is_ok()
}

fn is_separator(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || matches!(c, '-' | '=' | '_' | '+' | '|'))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
