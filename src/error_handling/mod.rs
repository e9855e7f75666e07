//! Error handling.
//!
//! This module provides the error types used throughout the crate:
//! - **InitializationError**: logger setup failures
//! - **ExportError**: one variant per failure kind of the export pipeline,
//!   so callers can match on the kind instead of on printed text

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError};
