//! Application initialization.
//!
//! The exporter has a single shared resource to set up before it runs: the
//! logger. The database connection is opened and closed by the export itself.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
