//! Projection of the summary into its final display columns.

use crate::table::CellValue;

use super::completion::format_percent;
use super::Summary;

/// Identity columns, always first and always kept.
pub const IDENTITY_COLUMNS: [&str; 4] = [
    "project_ref",
    "project_description",
    "project_owner",
    "event_name",
];

/// Computed columns, always last and always kept.
pub const COMPUTED_COLUMNS: [&str; 4] =
    ["total_lines", "%_completed", "check_total", "check_passes"];

/// Fixed ordering for the well-known status and bucket columns.
const PREFERRED_STATUS_ORDER: [&str; 7] = [
    "awaiting_brief",
    "awaiting_artwork",
    "awaiting_artwork_amends",
    "itg_approve_artwork",
    "approve_artwork",
    "not_applicable",
    "completed",
];

/// Select the status columns to display, as (label, merged index) pairs.
///
/// Preferred columns come first in their fixed order, then any remaining
/// observed statuses in first-seen order. Columns that are zero in every
/// row are dropped; an unknown status with lines always survives.
pub fn display_status_columns(summary: &Summary) -> Vec<(String, usize)> {
    let nonzero =
        |index: usize| summary.rows.iter().any(|row| row.merged_counts[index] > 0);

    let mut selected = Vec::new();
    for preferred in PREFERRED_STATUS_ORDER {
        if let Some(index) = summary.merged_columns.iter().position(|c| c == preferred)
            && nonzero(index)
        {
            selected.push((preferred.to_string(), index));
        }
    }
    for (index, column) in summary.merged_columns.iter().enumerate() {
        if PREFERRED_STATUS_ORDER.contains(&column.as_str()) {
            continue;
        }
        if nonzero(index) {
            selected.push((column.clone(), index));
        }
    }

    selected
}

/// The projected, externally visible summary table.
///
/// Header text stays canonical here; casing and label overrides belong to
/// whichever presenter renders the table.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SummaryTable {
    /// Project a summary into display columns and cell values.
    pub fn project(summary: &Summary) -> Self {
        let status_columns = display_status_columns(summary);

        let mut columns: Vec<String> =
            IDENTITY_COLUMNS.iter().map(|c| c.to_string()).collect();
        columns.extend(status_columns.iter().map(|(label, _)| label.clone()));
        columns.extend(COMPUTED_COLUMNS.iter().map(|c| c.to_string()));

        let rows = summary
            .rows
            .iter()
            .map(|row| {
                let mut cells = Vec::with_capacity(columns.len());
                cells.push(CellValue::String(row.key.project_ref.clone()));
                cells.push(CellValue::String(row.key.project_description.clone()));
                cells.push(CellValue::String(row.key.project_owner.clone()));
                cells.push(CellValue::String(row.key.event_name.clone()));
                for (_, index) in &status_columns {
                    cells.push(CellValue::Int(row.merged_counts[*index] as i64));
                }
                cells.push(CellValue::Int(row.total_lines as i64));
                cells.push(CellValue::String(format_percent(row.percent_completed)));
                cells.push(CellValue::Int(row.check_total as i64));
                cells.push(CellValue::Bool(row.check_passes));
                cells
            })
            .collect();

        SummaryTable { columns, rows }
    }

    /// Number of display rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::summarize;
    use crate::table::DataTable;

    fn summary_for(rows: &[[&str; 6]]) -> Summary {
        let headers: Vec<String> = [
            "project_ref",
            "project_description",
            "project_owner",
            "event_name",
            "brief_ref",
            "content_brief_status",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();
        let cells = rows
            .iter()
            .map(|row| row.iter().map(|v| CellValue::parse(v)).collect())
            .collect();
        summarize(&DataTable::new(headers, cells)).unwrap()
    }

    #[test]
    fn test_column_order_identity_statuses_computed() {
        let summary = summary_for(&[
            ["P1", "D", "O", "E", "B1", "completed"],
            ["P1", "D", "O", "E", "B2", "draft"],
        ]);

        let table = SummaryTable::project(&summary);
        assert_eq!(
            table.columns,
            vec![
                "project_ref",
                "project_description",
                "project_owner",
                "event_name",
                "awaiting_brief",
                "completed",
                "total_lines",
                "%_completed",
                "check_total",
                "check_passes",
            ]
        );
    }

    #[test]
    fn test_all_zero_bucket_columns_are_dropped() {
        let summary = summary_for(&[["P1", "D", "O", "E", "B1", "completed"]]);

        let table = SummaryTable::project(&summary);
        assert!(!table.columns.iter().any(|c| c == "awaiting_brief"));
        assert!(!table.columns.iter().any(|c| c == "awaiting_artwork_amends"));
    }

    #[test]
    fn test_unknown_status_follows_preferred_columns() {
        let summary = summary_for(&[
            ["P1", "D", "O", "E", "B1", "on hold"],
            ["P1", "D", "O", "E", "B2", "completed"],
        ]);

        let table = SummaryTable::project(&summary);
        let completed = table.columns.iter().position(|c| c == "completed").unwrap();
        let on_hold = table.columns.iter().position(|c| c == "on_hold").unwrap();
        assert!(on_hold > completed);
    }

    #[test]
    fn test_blank_status_column_survives_projection() {
        let summary = summary_for(&[["P1", "D", "O", "E", "B1", ""]]);

        let table = SummaryTable::project(&summary);
        assert!(table.columns.iter().any(|c| c.is_empty()));
    }

    #[test]
    fn test_row_values_line_up_with_columns() {
        let summary = summary_for(&[
            ["P1", "Desc", "Owner", "Event", "B1", "draft"],
            ["P1", "Desc", "Owner", "Event", "B2", "completed"],
        ]);

        let table = SummaryTable::project(&summary);
        let row = &table.rows[0];
        assert_eq!(row[0], CellValue::String("P1".to_string()));
        assert_eq!(row[4], CellValue::Int(1)); // awaiting_brief
        assert_eq!(row[5], CellValue::Int(1)); // completed
        assert_eq!(row[6], CellValue::Int(2)); // total_lines
        assert_eq!(row[7], CellValue::String("50%".to_string()));
        assert_eq!(row[8], CellValue::Int(2)); // check_total
        assert_eq!(row[9], CellValue::Bool(true));
    }

    #[test]
    fn test_empty_summary_keeps_identity_and_computed_columns() {
        let summary = summary_for(&[]);

        let table = SummaryTable::project(&summary);
        assert_eq!(table.columns.len(), 8);
        assert_eq!(table.row_count(), 0);
    }
}
