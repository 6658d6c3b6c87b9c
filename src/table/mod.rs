//! In-memory tabular dataset handed from the loaders to the summary
//! pipeline.
//!
//! A [`DataTable`] is the parsed form of one report region: the raw header
//! labels plus an ordered sequence of typed rows. Loaders produce it; the
//! pipeline addresses it through the canonical schema; the exporters render
//! it back out on the raw-data sheet.

// Submodule declarations
pub mod cell;
pub mod schema;

// Re-exports
pub use cell::CellValue;
pub use schema::{Schema, normalize_label, REQUIRED_COLUMNS};

use crate::common::{Error, Result};

/// A parsed tabular dataset: raw headers and typed rows.
///
/// Rows are padded with empty cells (or truncated) to the header width, so
/// every column index valid for the header is valid for every row.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    /// Build a table from raw headers and rows, normalizing row widths.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        DataTable { headers, rows }
    }

    /// Build a table from a raw cell grid, skipping leading metadata rows.
    ///
    /// The first row after the skipped region is the header row. A region
    /// with no rows left, or a header row with no text in any cell, is a
    /// malformed header.
    pub fn from_grid(grid: Vec<Vec<CellValue>>, skip_rows: usize) -> Result<Self> {
        let mut rows = grid.into_iter().skip(skip_rows);
        let header_cells = rows.next().ok_or_else(|| {
            Error::MalformedHeader(format!(
                "no header row after skipping {skip_rows} leading rows"
            ))
        })?;
        if header_cells.iter().all(|cell| cell.is_empty()) {
            return Err(Error::MalformedHeader("header row is empty".to_string()));
        }

        let headers: Vec<String> = header_cells.iter().map(|cell| cell.to_text()).collect();
        Ok(Self::new(headers, rows.collect()))
    }

    /// The raw header labels, as loaded.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The header labels after canonicalization.
    pub fn canonical_headers(&self) -> Vec<String> {
        self.headers.iter().map(|h| normalize_label(h)).collect()
    }

    /// The data rows, in input order.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of data rows (the header row is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
