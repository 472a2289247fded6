//! # TableRow Trait
//!
//! The `TableRow` trait defines the contract that every row type (fruit
//! options, orders, ...) must implement to be stored by the generic
//! `TableActor`. It names the columns, converts between Rust values and SQLite
//! values, and exposes an `on_append` hook that can veto a write.
//!
//! # Architecture Note
//! The actor owns the SQL. A row type only describes its shape, so the same
//! select/append loop serves every table in the application.

use rusqlite::types::Value;
use std::fmt::Debug;

/// A single column in a row's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: &'static str,
}

impl Column {
    /// A `TEXT NOT NULL` column.
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            sql_type: "TEXT NOT NULL",
        }
    }
}

/// Trait that any row type must implement to be managed by a `TableActor`.
///
/// Values returned by [`TableRow::to_values`] and read by [`TableRow::from_row`]
/// follow the order of [`TableRow::COLUMNS`].
pub trait TableRow: Clone + Send + Sync + Debug + 'static {
    /// The error type returned when [`TableRow::on_append`] rejects a row.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Columns in storage order.
    const COLUMNS: &'static [Column];

    /// Decode a row produced by `SELECT <COLUMNS> FROM <table>`.
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self>;

    /// Encode this row as insert parameters.
    fn to_values(&self) -> Vec<Value>;

    /// Called immediately before the row is written.
    /// Returning an error aborts the append and nothing is stored.
    fn on_append(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
