//! Typed records extracted from the input table.

use serde::Serialize;

use crate::table::{normalize_label, DataTable, Schema};

/// Identity of one summary row.
///
/// Well-formed input maps each project_ref to a single (description, owner,
/// event_name) triple. The pipeline does not enforce that; inconsistent
/// metadata yields one summary row per distinct tuple, which makes the
/// inconsistency visible instead of silently merging it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectKey {
    pub project_ref: String,
    pub project_description: String,
    pub project_owner: String,
    pub event_name: String,
}

/// One production line from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct BriefRecord {
    pub key: ProjectKey,
    /// Brief reference; counted per row, duplicates included
    pub brief_ref: String,
    /// Canonical status label; blank statuses stay as ""
    pub status: String,
}

/// Extract typed records from a table using resolved column positions.
///
/// Rows whose six schema cells are all empty are padding and get dropped.
/// Status labels are canonicalized here so every later stage works on
/// stable names ("Awaiting Artwork" and "awaiting_artwork" are one status).
pub fn extract_records(table: &DataTable, schema: &Schema) -> Vec<BriefRecord> {
    let mut records = Vec::with_capacity(table.row_count());

    for row in table.rows() {
        let cells = [
            &row[schema.project_ref],
            &row[schema.project_description],
            &row[schema.project_owner],
            &row[schema.event_name],
            &row[schema.brief_ref],
            &row[schema.content_brief_status],
        ];
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        records.push(BriefRecord {
            key: ProjectKey {
                project_ref: cells[0].to_text(),
                project_description: cells[1].to_text(),
                project_owner: cells[2].to_text(),
                event_name: cells[3].to_text(),
            },
            brief_ref: cells[4].to_text(),
            status: normalize_label(&cells[5].to_text()),
        });
    }

    records
}
