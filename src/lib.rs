//! Generates a GitBook-style schema reference for a MySQL database.
//!
//! The pipeline is a single sequential batch job: open a connection, enumerate
//! tables, collapse shard-suffixed tables into logical groups, fetch each
//! group's metadata, render the book, and write it out. Any failure aborts the
//! whole run; there is no retry and no partial-output recovery.

use thiserror::Error;

pub mod book;
pub mod conn;
pub mod group;
pub mod logging;
pub mod meta;
pub mod output;

pub use self::{
    book::Page,
    conn::{DbConfig, DbConn},
    group::{TableGroup, group_tables},
    meta::Column,
    output::OutputDir,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error connecting to database: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Error executing database query: {0}")]
    Db(#[from] sqlx::Error),

    /// A metadata query that must match exactly one row matched none. This
    /// means the table vanished between enumeration and the per-table fetch.
    #[error("no row returned for table `{table}` by {query}")]
    MetadataRowNotFound {
        table: String,
        query: &'static str,
    },

    #[error("Error writing output: {0}")]
    Io(#[from] std::io::Error),
}
