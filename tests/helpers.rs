// Shared test helpers for building LabelPilot-shaped databases.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::Path;

/// Creates a database file with the client's `labels` schema and the given rows.
///
/// `structure` is inserted as-is, so malformed JSON and NULL can be planted.
pub async fn create_labels_db(db_path: &Path, rows: &[(i64, &str, Option<&str>)]) {
    let mut conn = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Failed to create test database");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS labels (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            structure TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME
        )",
    )
    .execute(&mut conn)
    .await
    .expect("Failed to create labels table");

    for &(id, name, structure) in rows {
        sqlx::query("INSERT INTO labels (id, name, structure) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(structure)
            .execute(&mut conn)
            .await
            .expect("Failed to insert label");
    }

    conn.close().await.expect("Failed to close test database");
}

/// Creates a database file that has no `labels` table at all.
#[allow(dead_code)] // Used by some test files only
pub async fn create_db_without_labels(db_path: &Path) {
    let mut conn = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Failed to create test database");

    sqlx::query("CREATE TABLE barcodes (id INTEGER PRIMARY KEY, name TEXT, structure TEXT)")
        .execute(&mut conn)
        .await
        .expect("Failed to create barcodes table");

    conn.close().await.expect("Failed to close test database");
}
