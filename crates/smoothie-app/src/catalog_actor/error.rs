//! Error types for the catalog actor.

use table_actor::TableError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The fruit row was refused by its `on_append` hook.
    #[error("Invalid fruit: {0}")]
    InvalidFruit(String),

    /// An underlying database error occurred.
    #[error("Catalog database error: {0}")]
    DatabaseError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<TableError> for CatalogError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::Rejected(inner) => CatalogError::InvalidFruit(inner.to_string()),
            TableError::Database(db) => CatalogError::DatabaseError(db.to_string()),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
