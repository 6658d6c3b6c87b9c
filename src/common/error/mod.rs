//! Unified error types for the brieftally library.
//!
//! This module provides a single error type covering both the load/schema
//! failures that abort a run and the export-side failures, presenting a
//! consistent API to users.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
