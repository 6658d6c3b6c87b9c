//! Presenters for the computed summary.
//!
//! Two targets: plain CSV of the projected table, and a styled workbook
//! with the raw input alongside it.

pub mod csv;
#[cfg(feature = "xlsx")]
pub mod xlsx;

pub use csv::{display_header, summary_csv_bytes, write_summary_csv, BLANK_COLUMN_LABEL};
#[cfg(feature = "xlsx")]
pub use xlsx::{
    summary_workbook_bytes, write_summary_workbook, RAW_DATA_SHEET_NAME, SUMMARY_SHEET_NAME,
};
