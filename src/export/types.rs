//! Export types and options.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::RowOrder;

/// One exported label.
///
/// Field order is the key order of the emitted JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRecord {
    /// Primary key of the `labels` row
    pub id: i64,
    /// Display name
    pub name: String,
    /// Decoded `structure` column: object, array or scalar
    pub structure: Value,
}

/// Options for exporting labels.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Database path
    pub db_path: PathBuf,
    /// Output file path
    pub output: PathBuf,
    /// Row ordering
    pub order: RowOrder,
}

/// Results of a completed export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Number of label records written
    pub exported: usize,
    /// Path of the database that was read
    pub db_path: PathBuf,
    /// Path of the JSON file that was written
    pub output: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}
