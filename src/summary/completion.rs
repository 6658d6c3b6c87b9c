//! Per-project line totals and completion percentages.

use indexmap::IndexMap;

use super::record::{BriefRecord, ProjectKey};

/// Status counted as finished work.
pub const COMPLETED_STATUS: &str = "completed";

/// Count lines per project identity straight from the records.
///
/// Deliberately independent of the pivot and merged views: a column
/// dropped upstream cannot leak into the displayed total this way.
pub fn total_lines_by_key(records: &[BriefRecord]) -> IndexMap<ProjectKey, u64> {
    let mut totals: IndexMap<ProjectKey, u64> = IndexMap::new();
    for record in records {
        *totals.entry(record.key.clone()).or_insert(0) += 1;
    }
    totals
}

/// Completion percentage, rounded to the nearest integer.
///
/// A project with no recorded lines is 0% complete, not a division error.
pub fn percent_completed(completed: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u8
}

/// Render a percentage the way the report displays it.
pub fn format_percent(percent: u8) -> String {
    format!("{}%", percent)
}

/// Weighted overall percentage across summary rows.
///
/// Weighted by line count so small projects do not swamp large ones:
/// `round(Σ(pct · total) / Σ(total))`, 0 when there are no lines at all.
pub fn overall_percent<I>(rows: I) -> u8
where
    I: IntoIterator<Item = (u8, u64)>,
{
    let mut weighted_sum = 0u64;
    let mut total_lines = 0u64;
    for (percent, total) in rows {
        weighted_sum += percent as u64 * total;
        total_lines += total;
    }
    if total_lines == 0 {
        return 0;
    }
    (weighted_sum as f64 / total_lines as f64).round() as u8
}
