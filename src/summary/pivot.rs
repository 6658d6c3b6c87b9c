//! Full pivot of status counts: one row per identity, one column per status.

use indexmap::{IndexMap, IndexSet};

use super::aggregate::StatusCount;
use super::record::ProjectKey;

/// One pivot row: counts aligned with [`PivotTable::statuses`].
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    pub key: ProjectKey,
    pub counts: Vec<u64>,
}

impl PivotRow {
    /// Sum across every status column, the reconciliation ground truth.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// The unmerged pivot over all statuses observed in the dataset.
///
/// Later stages merge and drop columns for display; this table stays as
/// built so reconciliation can always see every counted line.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    statuses: Vec<String>,
    rows: Vec<PivotRow>,
}

impl PivotTable {
    /// Build the full pivot from grouped counts.
    ///
    /// Status columns cover the whole dataset, zero-filled where a project
    /// has no lines in a status. Column and row order is first-seen.
    pub fn build(counts: &[StatusCount]) -> Self {
        let mut statuses: IndexSet<String> = IndexSet::new();
        for count in counts {
            statuses.insert(count.status.clone());
        }

        let mut rows: IndexMap<ProjectKey, Vec<u64>> = IndexMap::new();
        for count in counts {
            let column = statuses.get_index_of(&count.status).unwrap_or(0);
            let row = rows
                .entry(count.key.clone())
                .or_insert_with(|| vec![0; statuses.len()]);
            row[column] += count.lines;
        }

        PivotTable {
            statuses: statuses.into_iter().collect(),
            rows: rows
                .into_iter()
                .map(|(key, counts)| PivotRow { key, counts })
                .collect(),
        }
    }

    /// Status column labels, dataset-wide, in first-seen order.
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// Pivot rows in first-seen identity order.
    pub fn rows(&self) -> &[PivotRow] {
        &self.rows
    }

    /// Position of a status column, if the status was observed.
    pub fn status_index(&self, status: &str) -> Option<usize> {
        self.statuses.iter().position(|s| s == status)
    }

    /// Count for one row and status label; 0 when the status is absent.
    pub fn count(&self, row: &PivotRow, status: &str) -> u64 {
        self.status_index(status)
            .map(|column| row.counts[column])
            .unwrap_or(0)
    }
}
