//! Unified error types for the brieftally library.
use thiserror::Error;

/// Main error type for brieftally operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook container could not be opened or read
    #[error("Unreadable workbook container: {0}")]
    Container(String),

    /// Named worksheet does not exist in the workbook
    #[error("Worksheet '{name}' not found (available: {available})")]
    SheetNotFound { name: String, available: String },

    /// Header row missing or unusable after skipping leading metadata rows
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// Required columns absent after header canonicalization
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Worksheet XML could not be interpreted
    #[error("XML error: {0}")]
    Xml(String),

    /// Cell reference (e.g. "A1") could not be parsed
    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    /// Export-side failure while building an output workbook or stream
    #[error("Export error: {0}")]
    Export(String),

    /// Feature disabled at compile time
    #[error("Feature '{0}' is disabled. Enable it with --features {0}")]
    FeatureDisabled(String),
}

impl Error {
    /// Whether this error belongs to the load taxonomy: the input file,
    /// container, or sheet region could not be turned into a table.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::Container(_)
                | Error::SheetNotFound { .. }
                | Error::MalformedHeader(_)
                | Error::Xml(_)
                | Error::InvalidReference(_)
                | Error::FeatureDisabled(_)
        )
    }

    /// Whether this error belongs to the schema taxonomy: the table loaded
    /// but lacks required fields after canonicalization.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Error::MissingColumns(_))
    }
}

/// Result type for brieftally operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_names() {
        let err = Error::MissingColumns(vec!["brief_ref".to_string(), "event_name".to_string()]);
        assert_eq!(
            err.to_string(),
            "Missing required columns: brief_ref, event_name"
        );
        assert!(err.is_schema_error());
        assert!(!err.is_load_error());
    }

    #[test]
    fn test_sheet_not_found_message() {
        let err = Error::SheetNotFound {
            name: "general_report".to_string(),
            available: "Sheet1, notes".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Worksheet 'general_report' not found (available: Sheet1, notes)"
        );
        assert!(err.is_load_error());
    }

    #[test]
    fn test_io_error_classified_as_load() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.is_load_error());
        assert!(!err.is_schema_error());
    }
}
