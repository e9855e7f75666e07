//! Queries against the `labels` table.

use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;

use crate::config::LABELS_QUERY;
use crate::error_handling::ExportError;

/// Row ordering applied to the labels query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowOrder {
    /// `ORDER BY id`, deterministic regardless of how the table was written.
    #[default]
    ById,
    /// No `ORDER BY`: whatever order SQLite scans the table in.
    Storage,
}

impl RowOrder {
    fn clause(self) -> &'static str {
        match self {
            RowOrder::ById => " ORDER BY id",
            RowOrder::Storage => "",
        }
    }
}

/// A `labels` row as stored, before the structure text is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    /// Primary key
    pub id: i64,
    /// Display name
    pub name: String,
    /// Serialized JSON, `None` when the column is NULL
    pub structure: Option<String>,
}

impl LabelRow {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            structure: row.try_get("structure")?,
        })
    }
}

/// Fetches every row of the `labels` table in one pass.
pub async fn fetch_label_rows(
    conn: &mut SqliteConnection,
    order: RowOrder,
) -> Result<Vec<LabelRow>, ExportError> {
    let sql = format!("{LABELS_QUERY}{}", order.clause());
    let rows = sqlx::query(&sql)
        .fetch_all(&mut *conn)
        .await
        .map_err(ExportError::Query)?;

    rows.iter()
        .map(LabelRow::from_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(ExportError::Query)
}

/// Fetches the first row of the `labels` table, if any.
pub async fn fetch_first_label_row(
    conn: &mut SqliteConnection,
) -> Result<Option<LabelRow>, ExportError> {
    let sql = format!("{LABELS_QUERY} LIMIT 1");
    let row = sqlx::query(&sql)
        .fetch_optional(&mut *conn)
        .await
        .map_err(ExportError::Query)?;

    row.as_ref()
        .map(LabelRow::from_row)
        .transpose()
        .map_err(ExportError::Query)
}
