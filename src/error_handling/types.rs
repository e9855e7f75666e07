//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for the labels export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The database file does not exist. Detected before any connection attempt.
    #[error("DB not found at {}", .0.display())]
    DatabaseNotFound(PathBuf),

    /// Opening the SQLite connection failed.
    #[error("Failed to open database: {0}")]
    Connect(#[source] sqlx::Error),

    /// Executing the query or reading a column failed.
    #[error("Failed to query labels: {0}")]
    Query(#[source] sqlx::Error),

    /// A row has a NULL `structure` column.
    #[error("Label {id} has no structure")]
    MissingStructure {
        /// Label id
        id: i64,
    },

    /// A row's `structure` column is not valid JSON.
    #[error("Label {id} has malformed structure JSON: {source}")]
    Decode {
        /// Label id
        id: i64,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the collected records failed.
    #[error("Failed to serialize labels: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Writing the output file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Process exit status for this error.
    ///
    /// A missing database is the only failure that ends the process with a
    /// non-zero status; every other failure is reported and the process exits
    /// normally.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportError::DatabaseNotFound(_) => 1,
            _ => 0,
        }
    }
}
