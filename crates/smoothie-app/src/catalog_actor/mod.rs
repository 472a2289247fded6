//! # Catalog Actor
//!
//! Owns the fruit catalog table (`FRUIT_NAME` column).
//!
//! ## Structure
//!
//! - [`row`] - [`TableRow`](table_actor::TableRow) implementation for [`FruitOption`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use smoothie_app::catalog_actor;
//! use smoothie_app::clients::CatalogClient;
//! use table_actor::TableName;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let conn = rusqlite::Connection::open_in_memory()?;
//!     let (actor, generic_client) = catalog_actor::new(conn, TableName::parse("fruit_options")?, 8)?;
//!     let client = CatalogClient::new(generic_client);
//!     let handle = actor.spawn();
//!
//!     client.add_fruit("Banana").await?;
//!     assert_eq!(client.fruit_names().await?, vec!["Banana".to_string()]);
//!
//!     drop(client);
//!     handle.await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod row;

pub use error::*;

use crate::model::FruitOption;
use rusqlite::Connection;
use table_actor::{TableActor, TableClient, TableError, TableName};

/// Creates the catalog actor and its client, creating the table if needed.
pub fn new(
    conn: Connection,
    table: TableName,
    buffer_size: usize,
) -> Result<(TableActor<FruitOption>, TableClient<FruitOption>), TableError> {
    let (actor, client) = TableActor::new(conn, table, buffer_size);
    actor.ensure_table()?;
    Ok((actor, client))
}
