//! Header canonicalization and required-column resolution.
//!
//! Raw exports arrive with mixed-case, space-separated column labels
//! ("Project Ref", "content brief status"). Everything downstream addresses
//! fields by canonical names, so the same rule is applied to input headers
//! and, later, to status labels when they become pivot columns.

use crate::common::{Error, Result};

/// Canonicalize a raw column label: trim, replace spaces with underscores,
/// lowercase. Matches the labelling of the production-line export.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().replace(' ', "_").to_lowercase()
}

/// Canonical names of the fields every record must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "project_ref",
    "project_description",
    "project_owner",
    "event_name",
    "brief_ref",
    "content_brief_status",
];

/// Resolved positions of the required fields within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub project_ref: usize,
    pub project_description: usize,
    pub project_owner: usize,
    pub event_name: usize,
    pub brief_ref: usize,
    pub content_brief_status: usize,
}

impl Schema {
    /// Locate the required fields in a raw header row.
    ///
    /// Headers are canonicalized before matching; the first occurrence of a
    /// duplicated label wins. Missing fields are reported together so the
    /// caller sees the whole shortfall at once.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let canonical: Vec<String> = headers.iter().map(|h| normalize_label(h)).collect();
        let find = |name: &str| canonical.iter().position(|c| c == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| find(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingColumns(missing));
        }

        Ok(Schema {
            project_ref: find("project_ref").unwrap(),
            project_description: find("project_description").unwrap(),
            project_owner: find("project_owner").unwrap(),
            event_name: find("event_name").unwrap(),
            brief_ref: find("brief_ref").unwrap(),
            content_brief_status: find("content_brief_status").unwrap(),
        })
    }
}
