//! Configuration constants.
//!
//! Fixed locations and the query used by the exporter.

/// Database location used by the LabelPilot desktop client, relative to the
/// user's home directory (`~` is expanded at runtime).
pub const DEFAULT_DB_PATH: &str = "~/AppData/Roaming/electron-labelpilot/client_data.db";

/// Output file written to the current working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "labels_db_dump.json";

/// Base query for the `labels` table. Ordering is appended by `RowOrder`.
pub const LABELS_QUERY: &str = "SELECT id, name, structure FROM labels";

/// Indentation used for the pretty-printed JSON output.
pub const JSON_INDENT: &[u8] = b"  ";
