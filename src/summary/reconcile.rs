//! Cross-check of displayed totals against the full pivot.

use indexmap::IndexMap;

use super::pivot::PivotTable;
use super::record::ProjectKey;

/// Reconciliation result for one summary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCheck {
    /// Sum over every status column of the full pivot
    pub check_total: u64,
    /// Whether the pivot sum matches the independent line total
    pub check_passes: bool,
}

/// Compare each pivot row's all-status sum with the independent totals.
///
/// A mismatch means lines were dropped or duplicated somewhere between
/// grouping and pivoting. It is surfaced per row and logged, never
/// swallowed, and never aborts the pipeline.
pub fn reconcile(pivot: &PivotTable, totals: &IndexMap<ProjectKey, u64>) -> Vec<RowCheck> {
    pivot
        .rows()
        .iter()
        .map(|row| {
            let check_total = row.total();
            let total_lines = totals.get(&row.key).copied().unwrap_or(0);
            let check_passes = check_total == total_lines;
            if !check_passes {
                tracing::warn!(
                    project_ref = %row.key.project_ref,
                    check_total,
                    total_lines,
                    "reconciliation mismatch"
                );
            }
            RowCheck {
                check_total,
                check_passes,
            }
        })
        .collect()
}
