//! Grouping of records into per-status line counts.

use indexmap::IndexMap;

use super::record::{BriefRecord, ProjectKey};

/// Line count for one (project identity, status) group.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCount {
    pub key: ProjectKey,
    pub status: String,
    pub lines: u64,
}

/// Group records by identity and status, counting rows per group.
///
/// Rows are the counted unit: duplicate brief_refs inside a status still
/// count once each. Groups come out in first-seen order, which keeps the
/// whole pipeline deterministic for a given input.
pub fn count_status_lines(records: &[BriefRecord]) -> Vec<StatusCount> {
    let mut groups: IndexMap<(ProjectKey, String), u64> = IndexMap::new();

    for record in records {
        *groups
            .entry((record.key.clone(), record.status.clone()))
            .or_insert(0) += 1;
    }

    groups
        .into_iter()
        .map(|((key, status), lines)| StatusCount { key, status, lines })
        .collect()
}
