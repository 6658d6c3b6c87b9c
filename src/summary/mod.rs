//! The status summary pipeline.
//!
//! Stages, in order: resolve the schema, extract typed records, group into
//! status counts, pivot over every observed status, merge bucket columns,
//! recount line totals independently, reconcile the two, and annotate each
//! row with its completion percentage. [`summarize`] runs them all;
//! [`SummaryTable`] projects the result into display columns.

pub mod aggregate;
pub mod buckets;
pub mod completion;
pub mod pivot;
pub mod project;
pub mod reconcile;
pub mod record;

use serde::Serialize;

use crate::common::Result;
use crate::table::{DataTable, Schema};

pub use aggregate::{count_status_lines, StatusCount};
pub use buckets::{bucket_for_status, merge_buckets, MergedView, BUCKET_TARGETS};
pub use completion::{format_percent, overall_percent, percent_completed, COMPLETED_STATUS};
pub use pivot::{PivotRow, PivotTable};
pub use project::{display_status_columns, SummaryTable, COMPUTED_COLUMNS, IDENTITY_COLUMNS};
pub use reconcile::{reconcile, RowCheck};
pub use record::{extract_records, BriefRecord, ProjectKey};

/// One computed summary row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub key: ProjectKey,
    /// Counts aligned with [`Summary::merged_columns`]
    pub merged_counts: Vec<u64>,
    /// Line total recounted from the raw records
    pub total_lines: u64,
    /// Rounded completion percentage in [0, 100]
    pub percent_completed: u8,
    /// All-status sum from the full pivot
    pub check_total: u64,
    /// False when `check_total` disagrees with `total_lines`
    pub check_passes: bool,
}

/// A computed summary plus the full-pivot reference it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Unmerged all-status pivot, kept for reconciliation and raw views
    pub pivot: PivotTable,
    /// Merged status columns, bucket targets first
    pub merged_columns: Vec<String>,
    /// One row per project identity, in first-seen order
    pub rows: Vec<SummaryRow>,
}

/// Run the summary pipeline over a parsed table.
///
/// Fails when required columns are missing from the header. Reconciliation
/// mismatches do not fail the run; they come back flagged on the rows.
pub fn summarize(table: &DataTable) -> Result<Summary> {
    let schema = Schema::resolve(&table.canonical_headers())?;
    let records = extract_records(table, &schema);
    let counts = count_status_lines(&records);
    let pivot = PivotTable::build(&counts);
    let MergedView {
        columns: merged_columns,
        rows: merged_rows,
    } = merge_buckets(&pivot);
    let totals = completion::total_lines_by_key(&records);
    let checks = reconcile(&pivot, &totals);

    let completed_column = pivot.status_index(COMPLETED_STATUS);
    let mut rows = Vec::with_capacity(pivot.rows().len());
    for ((pivot_row, merged_counts), check) in
        pivot.rows().iter().zip(merged_rows).zip(checks)
    {
        let total_lines = totals.get(&pivot_row.key).copied().unwrap_or(0);
        let completed = completed_column
            .map(|column| pivot_row.counts[column])
            .unwrap_or(0);
        rows.push(SummaryRow {
            key: pivot_row.key.clone(),
            merged_counts,
            total_lines,
            percent_completed: percent_completed(completed, total_lines),
            check_total: check.check_total,
            check_passes: check.check_passes,
        });
    }

    tracing::debug!(
        projects = rows.len(),
        statuses = pivot.statuses().len(),
        "summary computed"
    );

    Ok(Summary {
        pivot,
        merged_columns,
        rows,
    })
}
