//! Plain-text ranking table and total line.

use std::fmt::Write;

use power_core::formatting::{format_general, format_scientific};
use power_core::models::PowerReport;

/// Width of the right-aligned power column.
const POWER_WIDTH: usize = 12;
/// Fractional digits shown for each instance's power.
const POWER_DIGITS: usize = 5;
/// Significant digits of the total.
const TOTAL_SIGNIFICANT: usize = 6;
/// Length of the horizontal rules around the table.
const RULE_WIDTH: usize = 60;

/// Number of rows a `top_n` request displays for `report`.
///
/// Zero or negative requests show nothing.
pub fn shown_rows(report: &PowerReport, top_n: i64) -> usize {
    usize::try_from(top_n).map_or(0, |n| n.min(report.len()))
}

/// Render the ranking table (when `top_n > 0`) followed by the total line.
///
/// ```text
///
/// Top 2 power consumers under 'i_core/' in 'power_tt.txt':
///
///    Power (W) | Instance
/// ------------------------------------------------------------
///  5.50000e+00 | i_core/u_c
///  4.00000e+00 | i_core/u_a
/// ------------------------------------------------------------
///
/// TOTAL power for prefix 'i_core/' = 9.5 W
///
/// ```
pub fn render_text(report: &PowerReport, prefix: &str, source_label: &str, top_n: i64) -> String {
    let mut out = String::new();

    if top_n > 0 {
        let shown = shown_rows(report, top_n);
        let rule = "-".repeat(RULE_WIDTH);

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "\nTop {} power consumers under '{}' in '{}':\n",
            shown, prefix, source_label
        );
        let _ = writeln!(out, "{:>width$} | Instance", "Power (W)", width = POWER_WIDTH);
        let _ = writeln!(out, "{}", rule);
        for record in report.top(shown) {
            let _ = writeln!(
                out,
                "{:>width$} | {}",
                format_scientific(record.power, POWER_DIGITS),
                record.name,
                width = POWER_WIDTH
            );
        }
        let _ = writeln!(out, "{}", rule);
    }

    let _ = writeln!(out, "\n{}\n", total_line(report.total, prefix));
    out
}

/// The `TOTAL power for prefix ...` summary line, without surrounding blanks.
pub fn total_line(total: f64, prefix: &str) -> String {
    format!(
        "TOTAL power for prefix '{}' = {} W",
        prefix,
        format_general(total, TOTAL_SIGNIFICANT)
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────────
