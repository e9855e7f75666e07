//! Export functionality for the LabelPilot labels table.
//!
//! This module reads the `labels` table, decodes each row's JSON `structure`
//! column and writes the collected records to a pretty-printed JSON file.

mod json;
mod probe;
mod types;

pub use crate::storage::{LabelRow, RowOrder};
pub use json::{decode_rows, export_labels, write_records};
pub use probe::dump_first_structure;
pub use types::{ExportOptions, ExportReport, LabelRecord};
