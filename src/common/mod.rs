//! Common types and utilities shared across the loader, summary, and export
//! layers.

// Submodule declarations
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
