//! # Table Errors
//!
//! This module defines the common error types used throughout the table actor
//! framework. Domain clients map these into their own error enums.

/// Errors that can occur while talking to a `TableActor`.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),
    #[error("Row rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}
