//! Schema metadata queries against the documented database.
//!
//! All fetches are keyed by the physical table name and run on whatever
//! executor the caller passes in. Zero-row results from the single-row queries
//! surface as [`Error::MetadataRowNotFound`] and abort the run.

use sqlx::{Executor, MySql, Row, mysql::MySqlRow};
use tracing::instrument;

use crate::Error;

/// One column of a table, as reported by `SHOW FULL COLUMNS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub field: String,
    /// Declared type, e.g. `varchar(255)`.
    pub data_type: String,
    /// `YES` or `NO`.
    pub null: String,
    /// Key classification, e.g. `PRI`, `UNI`, or empty.
    pub key: String,
    /// Default value resolved to plain text; empty when the column has none.
    pub default_value: String,
    pub comment: String,
    /// Extra attributes, e.g. `auto_increment`.
    pub extra: String,
}

/// The raw `Default` cell as it comes off the wire: absent, numeric, or text.
/// Resolved into the column's plain string field once, at fetch time.
#[derive(Debug, PartialEq, Eq)]
enum DefaultValue {
    Absent,
    Numeric(String),
    Text(String),
}

impl DefaultValue {
    fn classify(raw: Option<String>) -> Self {
        match raw {
            None => Self::Absent,
            Some(value) => match value.parse::<i64>() {
                Ok(number) => Self::Numeric(number.to_string()),
                Err(_) => Self::Text(value),
            },
        }
    }

    fn resolve(self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Numeric(text) | Self::Text(text) => text,
        }
    }
}

/// List all table names in the connected database. An empty database yields an
/// empty vector, not an error.
#[instrument(skip(exe), err)]
pub async fn list_tables<'c, E>(exe: E) -> Result<Vec<String>, Error>
where
    E: Executor<'c, Database = MySql>,
{
    let rows = sqlx::query("SHOW TABLES").fetch_all(exe).await?;
    let names = rows
        .iter()
        .map(|row| row.try_get(0))
        .collect::<Result<_, _>>()?;
    Ok(names)
}

/// Fetch the table comment from `SHOW TABLE STATUS`. The remaining status
/// columns (engine, row counts, timings) are not read.
#[instrument(skip(exe), err)]
pub async fn fetch_status<'c, E>(exe: E, table: &str) -> Result<String, Error>
where
    E: Executor<'c, Database = MySql>,
{
    let row = sqlx::query("SHOW TABLE STATUS WHERE Name = ?")
        .bind(table)
        .fetch_optional(exe)
        .await?
        .ok_or_else(|| Error::MetadataRowNotFound {
            table: table.to_string(),
            query: "SHOW TABLE STATUS",
        })?;
    Ok(row.try_get("Comment")?)
}

/// Fetch the full column descriptions of a table, in definition order. A table
/// with no columns yields an empty vector.
#[instrument(skip(exe), err)]
pub async fn fetch_columns<'c, E>(exe: E, table: &str) -> Result<Vec<Column>, Error>
where
    E: Executor<'c, Database = MySql>,
{
    let query = format!("SHOW FULL COLUMNS FROM {}", quote_ident(table));
    let rows = sqlx::query(query.as_str()).fetch_all(exe).await?;
    rows.iter().map(column_from_row).collect()
}

/// Fetch the literal `CREATE TABLE` statement for a table.
#[instrument(skip(exe), err)]
pub async fn fetch_create_statement<'c, E>(exe: E, table: &str) -> Result<String, Error>
where
    E: Executor<'c, Database = MySql>,
{
    let query = format!("SHOW CREATE TABLE {}", quote_ident(table));
    let row = sqlx::query(query.as_str())
        .fetch_optional(exe)
        .await?
        .ok_or_else(|| Error::MetadataRowNotFound {
            table: table.to_string(),
            query: "SHOW CREATE TABLE",
        })?;
    // Columns are `Table` and `Create Table`.
    Ok(row.try_get(1)?)
}

fn column_from_row(row: &MySqlRow) -> Result<Column, Error> {
    let default_value = DefaultValue::classify(row.try_get("Default")?);
    Ok(Column {
        field: row.try_get("Field")?,
        data_type: row.try_get("Type")?,
        null: row.try_get("Null")?,
        key: row.try_get("Key")?,
        default_value: default_value.resolve(),
        comment: row.try_get("Comment")?,
        extra: row.try_get("Extra")?,
    })
}

/// Table names cannot be bound as statement parameters, so they are quoted
/// before interpolation.
fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}
