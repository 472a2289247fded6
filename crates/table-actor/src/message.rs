//! # Table Messages
//!
//! This module defines the message types used for communication between the
//! `TableClient` and `TableActor`.

use crate::error::TableError;
use crate::row::TableRow;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, TableError>>;

/// Message sent to a `TableActor`.
///
/// Tables in this framework are append-only logs: rows are read back in
/// insertion order and never updated or deleted.
///
/// - **Select**: Read every row of the table.
/// - **Append**: Validate a row via [`TableRow::on_append`] and insert it.
#[derive(Debug)]
pub enum TableRequest<T: TableRow> {
    Select {
        respond_to: Response<Vec<T>>,
    },
    Append {
        row: T,
        respond_to: Response<()>,
    },
}
