//! Database connection management.
//!
//! The exporter needs exactly one connection for one query, so this module
//! hands out a single `SqliteConnection` rather than a pool:
//! - Read-only mode, the exporter never writes to the client database
//! - No implicit creation: a missing file is an error, never an empty database

use std::path::Path;

use log::{debug, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use crate::error_handling::ExportError;

/// Opens a read-only connection to the SQLite file at `db_path`.
///
/// Existence is checked first so a missing file is reported as
/// `ExportError::DatabaseNotFound` before any connection attempt.
pub async fn open_read_only(db_path: &Path) -> Result<SqliteConnection, ExportError> {
    if !db_path.exists() {
        return Err(ExportError::DatabaseNotFound(db_path.to_path_buf()));
    }

    let conn = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false)
        .connect()
        .await
        .map_err(ExportError::Connect)?;

    debug!("Opened {} read-only", db_path.display());
    Ok(conn)
}

/// Closes a connection, logging instead of failing if the close itself errors.
///
/// Called on both the success and the failure path of every operation that
/// opened a connection.
pub async fn close_connection(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection cleanly: {e}");
    }
}
