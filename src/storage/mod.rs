//! Database access for the exporter.
//!
//! Everything here is read-only: one connection, the `labels` queries and the
//! explicit close used on both the success and the failure path.

pub mod labels;
pub mod pool;

// Re-export commonly used items
pub use labels::{fetch_first_label_row, fetch_label_rows, LabelRow, RowOrder};
pub use pool::{close_connection, open_read_only};
