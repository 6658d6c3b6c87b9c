//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from
//! format-crate error types to the unified Error type.

#[cfg(feature = "xlsx")]
use super::types::Error;

#[cfg(feature = "xlsx")]
impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Container(err.to_string())
    }
}

#[cfg(feature = "xlsx")]
impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Error::Export(err.to_string())
    }
}
