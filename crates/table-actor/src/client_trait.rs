//! # TableAccess Trait
//!
//! Provides a common interface for domain clients, adding a default `rows`
//! method built on top of a generic `TableClient`.
use crate::{TableClient, TableError, TableRow};
use async_trait::async_trait;

/// Trait for domain-specific clients to inherit the standard read operation.
///
/// # Example
///
/// ```rust
/// use table_actor::{Column, TableAccess, TableClient, TableError, TableRow};
/// use rusqlite::types::Value;
///
/// #[derive(Clone, Debug)]
/// struct Tag { label: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag error")]
/// struct TagError;
///
/// impl TableRow for Tag {
///     type Error = TagError;
///     const COLUMNS: &'static [Column] = &[Column::text("LABEL")];
///     fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
///         Ok(Self { label: row.get(0)? })
///     }
///     fn to_values(&self) -> Vec<Value> { vec![Value::Text(self.label.clone())] }
/// }
///
/// struct TagClient { inner: TableClient<Tag> }
///
/// impl TableAccess<Tag> for TagClient {
///     type Error = String;
///     fn inner(&self) -> &TableClient<Tag> { &self.inner }
///     fn map_error(e: TableError) -> Self::Error { e.to_string() }
/// }
///
/// async fn usage(client: TagClient) {
///     // rows() is provided automatically
///     let _ = client.rows().await;
/// }
/// ```
#[async_trait]
pub trait TableAccess<T: TableRow>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic TableClient.
    fn inner(&self) -> &TableClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: TableError) -> Self::Error;

    /// Fetch every row of the table.
    #[tracing::instrument(skip(self))]
    async fn rows(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().select_all().await.map_err(Self::map_error)
    }
}
