//! Static merging of raw statuses into display buckets.

use indexmap::IndexMap;
use phf::phf_map;

use super::pivot::PivotTable;

/// Raw status label → display bucket. Fixed at build time.
///
/// Bucket targets map to themselves so lines already carrying the bucket
/// label land in the same column instead of colliding with it.
static BUCKET_FOR_STATUS: phf::Map<&'static str, &'static str> = phf_map! {
    "awaiting_brief" => "awaiting_brief",
    "draft" => "awaiting_brief",
    "saved" => "awaiting_brief",
    "awaiting_agency_briefs" => "awaiting_brief",
    "awaiting_artwork_amends" => "awaiting_artwork_amends",
    "client_rejected_artwork" => "awaiting_artwork_amends",
    "itg_rejected_artwork" => "awaiting_artwork_amends",
    "rejected_artwork" => "awaiting_artwork_amends",
};

/// Bucket columns in declaration order.
pub const BUCKET_TARGETS: [&str; 2] = ["awaiting_brief", "awaiting_artwork_amends"];

/// Bucket a status label resolves to, if any.
pub fn bucket_for_status(status: &str) -> Option<&'static str> {
    BUCKET_FOR_STATUS.get(status).copied()
}

/// The bucket-merged view of a pivot.
///
/// Bucket source columns are folded into their targets here; the pivot
/// itself stays untouched so reconciliation keeps seeing every status.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedView {
    /// Bucket targets first, then unmapped statuses in pivot order
    pub columns: Vec<String>,
    /// Per-pivot-row counts aligned with `columns`
    pub rows: Vec<Vec<u64>>,
}

/// Merge bucket source columns into their targets.
///
/// Every bucket target column is present even when none of its sources
/// occur, so downstream projection can apply one all-zero drop rule.
/// Absent sources simply contribute nothing.
pub fn merge_buckets(pivot: &PivotTable) -> MergedView {
    let mut columns: IndexMap<String, usize> = IndexMap::new();
    for target in BUCKET_TARGETS {
        columns.insert(target.to_string(), columns.len());
    }
    for status in pivot.statuses() {
        if bucket_for_status(status).is_none() && !columns.contains_key(status) {
            columns.insert(status.clone(), columns.len());
        }
    }

    let rows = pivot
        .rows()
        .iter()
        .map(|row| {
            let mut merged = vec![0u64; columns.len()];
            for (status, &count) in pivot.statuses().iter().zip(&row.counts) {
                let label = bucket_for_status(status).unwrap_or(status.as_str());
                if let Some(&column) = columns.get(label) {
                    merged[column] += count;
                }
            }
            merged
        })
        .collect();

    MergedView {
        columns: columns.into_keys().collect(),
        rows,
    }
}
