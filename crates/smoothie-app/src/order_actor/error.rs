//! Error types for the order actor.

use crate::model::OrderRejection;
use table_actor::TableError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order failed validation and was not stored.
    #[error("Order rejected: {0}")]
    Rejected(#[from] OrderRejection),

    /// An underlying database error occurred.
    #[error("Order database error: {0}")]
    DatabaseError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<TableError> for OrderError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::Rejected(inner) => match inner.downcast::<OrderRejection>() {
                Ok(rejection) => OrderError::Rejected(*rejection),
                Err(other) => OrderError::DatabaseError(other.to_string()),
            },
            TableError::Database(db) => OrderError::DatabaseError(db.to_string()),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
