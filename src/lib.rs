//! labels_dump library: exports the LabelPilot `labels` table to JSON
//!
//! The desktop client keeps its label templates in a SQLite database, one row
//! per label with the layout stored as serialized JSON in the `structure`
//! column. This library reads that table, decodes every structure and writes
//! the result as a single pretty-printed JSON array.
//!
//! # Example
//!
//! ```no_run
//! use labels_dump::{export_labels, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     db_path: PathBuf::from("client_data.db"),
//!     ..Default::default()
//! };
//!
//! let report = export_labels(&config.export_options()).await?;
//! println!("Exported {} labels to {}", report.exported, report.output.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The database driver is async; call the library from within a Tokio runtime.
//! A current-thread runtime is enough, the export never runs anything in
//! parallel.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ExportError, InitializationError};
pub use export::{
    dump_first_structure, export_labels, ExportOptions, ExportReport, LabelRecord, RowOrder,
};
