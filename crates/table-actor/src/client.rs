//! # Table Client
//!
//! This module defines the async handle used to talk to a `TableActor`.

use crate::error::TableError;
use crate::message::TableRequest;
use crate::row::TableRow;
use tokio::sync::{mpsc, oneshot};

/// ## TableClient
///
/// The `TableClient<T>` forwards Select and Append requests over a Tokio mpsc
/// channel and waits for the reply on a oneshot channel. It holds only a
/// sender, so cloning is cheap and clones can be shared across tasks.
///
/// When every clone is dropped the actor's loop ends.
#[derive(Clone)]
pub struct TableClient<T: TableRow> {
    sender: mpsc::Sender<TableRequest<T>>,
}

impl<T: TableRow> TableClient<T> {
    pub fn new(sender: mpsc::Sender<TableRequest<T>>) -> Self {
        Self { sender }
    }

    /// Reads every row of the table in insertion order.
    pub async fn select_all(&self) -> Result<Vec<T>, TableError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Select { respond_to })
            .await
            .map_err(|_| TableError::ActorClosed)?;
        response.await.map_err(|_| TableError::ActorDropped)?
    }

    /// Appends one row.
    pub async fn append(&self, row: T) -> Result<(), TableError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TableRequest::Append { row, respond_to })
            .await
            .map_err(|_| TableError::ActorClosed)?;
        response.await.map_err(|_| TableError::ActorDropped)?
    }
}
