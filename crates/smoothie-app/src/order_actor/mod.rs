//! # Order Actor
//!
//! Owns the orders table (`INGREDIENTS`, `NAME_ON_ORDER`). The table is
//! append-only: orders are never updated or deleted.
//!
//! ## Structure
//!
//! - [`row`] - [`TableRow`](table_actor::TableRow) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod error;
pub mod row;

pub use error::*;

use crate::model::Order;
use rusqlite::Connection;
use table_actor::{TableActor, TableClient, TableError, TableName};

/// Creates the order actor and its client, creating the table if needed.
pub fn new(
    conn: Connection,
    table: TableName,
    buffer_size: usize,
) -> Result<(TableActor<Order>, TableClient<Order>), TableError> {
    let (actor, client) = TableActor::new(conn, table, buffer_size);
    actor.ensure_table()?;
    Ok((actor, client))
}
