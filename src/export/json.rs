//! JSON export functionality.
//!
//! Exports the `labels` table to a single JSON array, indented with two spaces
//! and with non-ASCII characters written literally.

use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use sqlx::sqlite::SqliteConnection;
use tempfile::NamedTempFile;

use crate::config::JSON_INDENT;
use crate::error_handling::ExportError;
use crate::storage::{close_connection, fetch_label_rows, open_read_only, LabelRow};

use super::types::{ExportOptions, ExportReport, LabelRecord};

/// Exports every label in the database to a JSON file.
///
/// The connection is closed whether the query, decode and write steps succeed
/// or not. The output file is replaced only after the full document has been
/// written, so a failed run leaves any earlier output untouched.
///
/// # Errors
///
/// - `ExportError::DatabaseNotFound` if `opts.db_path` does not exist; nothing
///   is opened or written in that case
/// - `ExportError::Connect` / `ExportError::Query` for database failures
/// - `ExportError::MissingStructure` / `ExportError::Decode` for a row whose
///   `structure` column is NULL or not valid JSON
/// - `ExportError::Serialize` / `ExportError::Write` for output failures
pub async fn export_labels(opts: &ExportOptions) -> Result<ExportReport, ExportError> {
    let start = Instant::now();
    info!("Exporting labels from {}", opts.db_path.display());

    let mut conn = open_read_only(&opts.db_path).await?;
    let result = export_with_connection(&mut conn, opts).await;
    close_connection(conn).await;
    let exported = result?;

    let elapsed_seconds = start.elapsed().as_secs_f64();
    info!(
        "Wrote {} labels to {} in {:.2}s",
        exported,
        opts.output.display(),
        elapsed_seconds
    );

    Ok(ExportReport {
        exported,
        db_path: opts.db_path.clone(),
        output: opts.output.clone(),
        elapsed_seconds,
    })
}

async fn export_with_connection(
    conn: &mut SqliteConnection,
    opts: &ExportOptions,
) -> Result<usize, ExportError> {
    let rows = fetch_label_rows(conn, opts.order).await?;
    debug!("Fetched {} rows from labels ({:?} order)", rows.len(), opts.order);

    let records = decode_rows(rows)?;
    write_records(&records, &opts.output)?;
    Ok(records.len())
}

/// Decodes each row's `structure` text into a JSON value, preserving row order.
///
/// Stops at the first row that fails to decode.
pub fn decode_rows(rows: Vec<LabelRow>) -> Result<Vec<LabelRecord>, ExportError> {
    rows.into_iter()
        .map(|row| -> Result<LabelRecord, ExportError> {
            let text = row
                .structure
                .ok_or(ExportError::MissingStructure { id: row.id })?;
            let structure = serde_json::from_str(&text)
                .map_err(|source| ExportError::Decode { id: row.id, source })?;
            Ok(LabelRecord {
                id: row.id,
                name: row.name,
                structure,
            })
        })
        .collect()
}

/// Writes `records` to `output` as an indented JSON array.
///
/// The document goes to a temporary file in the destination's directory first
/// and is renamed over `output` once fully written.
pub fn write_records(records: &[LabelRecord], output: &Path) -> Result<(), ExportError> {
    let write_err = |source: std::io::Error| ExportError::Write {
        path: output.to_path_buf(),
        source,
    };

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(write_err)?;

    {
        let mut writer = BufWriter::new(tmp.as_file());
        let mut ser =
            Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(JSON_INDENT));
        records.serialize(&mut ser).map_err(|e| {
            if e.is_io() {
                write_err(e.into())
            } else {
                ExportError::Serialize(e)
            }
        })?;
        writer.flush().map_err(write_err)?;
    }

    tmp.persist(output).map_err(|e| write_err(e.error))?;
    Ok(())
}
