//! Brieftally - a per-project status summariser for content-brief exports
//!
//! This library ingests tabular exports of production-line records for
//! marketing and content events, then produces one summary row per project:
//! line counts by workflow status merged into display buckets, a completion
//! percentage, and a reconciliation check that flags dropped or duplicated
//! lines.
//!
//! # Features
//!
//! - **Workbook reader**: Pull a named sheet out of an `.xlsx` package
//! - **Delimited reader**: Stream CSV/TSV/PRN exports of the same report
//! - **Status pipeline**: Group, pivot, bucket-merge and reconcile in one pass
//! - **Presenters**: CSV output, or a styled workbook with the raw rows beside it
//!
//! # Example - Summarising a workbook export
//!
//! ```no_run
//! use brieftally::{load_table, summarize, LoadOptions, SummaryTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = load_table("production_lines.xlsx", &LoadOptions::default())?;
//! let summary = summarize(&table)?;
//!
//! for row in &summary.rows {
//!     println!("{}: {}%", row.key.project_ref, row.percent_completed);
//! }
//!
//! // Project into display columns for rendering
//! let display = SummaryTable::project(&summary);
//! println!("{} columns, {} projects", display.columns.len(), display.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Exporting the summary
//!
//! ```no_run
//! use brieftally::export::write_summary_workbook;
//! use brieftally::{load_table, summarize, LoadOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = load_table("production_lines.xlsx", &LoadOptions::default())?;
//! let summary = summarize(&table)?;
//! write_summary_workbook("status_summary.xlsx", &summary, &table)?;
//! # Ok(())
//! # }
//! ```

/// Shared plumbing: the crate error type and XML text helpers
pub mod common;

/// Presenters that render a computed summary to CSV or a workbook
pub mod export;

/// Input readers: format detection, workbook and delimited-text loading
pub mod loader;

/// The aggregation pipeline: records, pivot, buckets, reconciliation
pub mod summary;

/// In-memory tables, cell values and schema resolution
pub mod table;

// Re-export the common entry points
pub use common::{Error, Result};
pub use loader::{detect_input_format, load_table, InputFormat, LoadOptions, DEFAULT_SHEET_NAME};
pub use summary::{summarize, ProjectKey, Summary, SummaryRow, SummaryTable};
pub use table::{CellValue, DataTable};
