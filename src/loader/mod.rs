//! Input loading: format detection and table construction.
//!
//! Inputs arrive either as Excel workbooks or as delimited text exports of
//! the same report. [`load_table`] sniffs the physical format from magic
//! bytes and hands off to the matching reader.

pub mod csv;
#[cfg(feature = "xlsx")]
pub mod xlsx;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::common::Result;
use crate::table::DataTable;

pub use csv::{load_delimited, parse_delimited, DelimitedConfig, DelimitedParser};
#[cfg(feature = "xlsx")]
pub use xlsx::{load_workbook_table, workbook_table_from_bytes};

/// Sheet read from workbook inputs when no sheet name is given.
pub const DEFAULT_SHEET_NAME: &str = "general_report";

/// Rows skipped above the header in workbook exports. The report tool
/// writes a banner row before the real header.
pub const WORKBOOK_SKIP_ROWS: usize = 1;

/// ZIP local file header magic, the start of every workbook package.
const ZIP_MAGIC: &[u8; 4] = b"PK\x03\x04";

/// Detected physical format of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// ZIP-packaged Excel workbook
    Workbook,
    /// Delimited text (CSV and friends)
    Delimited,
}

/// Options controlling how an input file is read.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Sheet to read from workbook inputs
    pub sheet_name: String,
    /// Rows to skip above the header; `None` picks the format default
    pub skip_rows: Option<usize>,
    /// Field delimiter for text inputs
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            skip_rows: None,
            delimiter: b',',
        }
    }
}

impl LoadOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the workbook sheet to read
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Set an explicit number of rows to skip above the header
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = Some(skip_rows);
        self
    }

    /// Set the field delimiter for text inputs
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Classify input bytes by magic number.
pub fn detect_format_from_bytes(bytes: &[u8]) -> InputFormat {
    if bytes.starts_with(ZIP_MAGIC) {
        InputFormat::Workbook
    } else {
        InputFormat::Delimited
    }
}

/// Detect the physical format of a file from its leading bytes.
pub fn detect_input_format<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let mut file = File::open(path)?;
    let mut magic = [0u8; 4];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(detect_format_from_bytes(&magic)),
        // Too short for a workbook package, treat as text
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(InputFormat::Delimited),
        Err(err) => Err(err.into()),
    }
}

/// Load an input file into a table, detecting its format first.
///
/// Workbook inputs default to skipping [`WORKBOOK_SKIP_ROWS`] banner rows;
/// text inputs default to none. An explicit `skip_rows` overrides both.
pub fn load_table<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<DataTable> {
    let path = path.as_ref();
    let format = detect_input_format(path)?;
    tracing::debug!(path = %path.display(), ?format, "loading input");

    match format {
        InputFormat::Workbook => {
            let skip_rows = options.skip_rows.unwrap_or(WORKBOOK_SKIP_ROWS);
            load_workbook_sheet(path, &options.sheet_name, skip_rows)
        },
        InputFormat::Delimited => {
            let skip_rows = options.skip_rows.unwrap_or(0);
            let config = DelimitedConfig::new().with_delimiter(options.delimiter);
            load_delimited(path, config, skip_rows)
        },
    }
}

#[cfg(feature = "xlsx")]
fn load_workbook_sheet(path: &Path, sheet_name: &str, skip_rows: usize) -> Result<DataTable> {
    xlsx::load_workbook_table(path, sheet_name, skip_rows)
}

#[cfg(not(feature = "xlsx"))]
fn load_workbook_sheet(_path: &Path, _sheet_name: &str, _skip_rows: usize) -> Result<DataTable> {
    Err(crate::common::Error::FeatureDisabled(
        "workbook input requires the `xlsx` feature".to_string(),
    ))
}
