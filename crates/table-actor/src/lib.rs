//! # Table Actor
//!
//! This crate provides the building blocks for owning SQLite tables with
//! actors. Each table is served by one [`TableActor`] that holds the only
//! connection to it and processes requests one at a time; the rest of the
//! application talks to it through a cheap, cloneable [`TableClient`].
//!
//! ## Why an actor per table?
//!
//! - A `rusqlite::Connection` is not `Sync`. Giving it to exactly one task
//!   removes every lock around it.
//! - Blocking SQLite calls run on the blocking pool, while request handlers
//!   stay async and only await a oneshot reply.
//! - Reads and writes against a table are naturally serialized, so an append
//!   is either fully visible to the next select or not at all.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Row Layer** ([`TableRow`]) - Column layout, value conversion, and the `on_append` hook
//! 2. **Runtime Layer** ([`TableActor`]) - The select/append loop over one connection
//! 3. **Interface Layer** ([`TableClient`], [`TableAccess`]) - Type-safe async access
//!
//! ## Example
//!
//! ```rust
//! use rusqlite::{types::Value, Connection};
//! use table_actor::{Column, TableActor, TableName, TableRow};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Visit { page: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("blank page")]
//! struct BlankPage;
//!
//! impl TableRow for Visit {
//!     type Error = BlankPage;
//!     const COLUMNS: &'static [Column] = &[Column::text("PAGE")];
//!
//!     fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
//!         Ok(Self { page: row.get(0)? })
//!     }
//!
//!     fn to_values(&self) -> Vec<Value> {
//!         vec![Value::Text(self.page.clone())]
//!     }
//!
//!     fn on_append(&self) -> Result<(), BlankPage> {
//!         if self.page.is_empty() { Err(BlankPage) } else { Ok(()) }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let conn = Connection::open_in_memory()?;
//!     let (actor, client) = TableActor::<Visit>::new(conn, TableName::parse("visits")?, 16);
//!     actor.ensure_table()?;
//!     let handle = actor.spawn();
//!
//!     client.append(Visit { page: "/".into() }).await?;
//!     assert_eq!(client.select_all().await?.len(), 1);
//!
//!     // Dropping the last client ends the actor loop.
//!     drop(client);
//!     handle.await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockTable`], which hands out a real
//! `TableClient` backed by canned responses, so domain clients can be tested
//! without a database.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod name;
pub mod row;
pub mod tracing;

// Re-export core types for convenience
pub use actor::TableActor;
pub use client::TableClient;
pub use client_trait::TableAccess;
pub use error::TableError;
pub use message::{Response, TableRequest};
pub use name::TableName;
pub use row::{Column, TableRow};
