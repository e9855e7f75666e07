//! Raw structure probe.
//!
//! Writes the undecoded `structure` text of the first label to a file, for
//! inspecting what the desktop client actually stored.

use std::path::Path;

use log::info;
use sqlx::sqlite::SqliteConnection;

use crate::error_handling::ExportError;
use crate::storage::{close_connection, fetch_first_label_row, open_read_only};

/// Writes the first label's raw `structure` text verbatim to `output`.
///
/// Returns the label's name, or `None` when the table is empty (nothing is
/// written then).
pub async fn dump_first_structure(
    db_path: &Path,
    output: &Path,
) -> Result<Option<String>, ExportError> {
    let mut conn = open_read_only(db_path).await?;
    let result = probe_with_connection(&mut conn, output).await;
    close_connection(conn).await;
    result
}

async fn probe_with_connection(
    conn: &mut SqliteConnection,
    output: &Path,
) -> Result<Option<String>, ExportError> {
    let Some(row) = fetch_first_label_row(conn).await? else {
        info!("No labels found in DB");
        return Ok(None);
    };

    let text = row
        .structure
        .ok_or(ExportError::MissingStructure { id: row.id })?;
    std::fs::write(output, text).map_err(|source| ExportError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!("Structure of '{}' written to {}", row.name, output.display());
    Ok(Some(row.name))
}
