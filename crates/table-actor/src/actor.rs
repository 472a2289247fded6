//! # Table Actor
//!
//! This module defines the `TableActor`, the component that owns one SQLite
//! connection and serves every read and write for one table. It implements the
//! "Server" side of the Actor Model: messages are processed sequentially, so
//! the connection never needs a lock.

use crate::client::TableClient;
use crate::error::TableError;
use crate::message::TableRequest;
use crate::name::TableName;
use crate::row::TableRow;
use rusqlite::{params_from_iter, Connection};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// The actor that owns a table.
///
/// # Architecture Note
/// The actor holds the only handle to its `Connection` and the receiver end of
/// the channel. `rusqlite` is a blocking API, so the loop runs on Tokio's
/// blocking pool (see [`TableActor::spawn`]) and pulls messages with
/// `blocking_recv`. Clients stay fully async.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `TableActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Prepare**: Call `ensure_table()` if the table may not exist yet.
/// 3.  **Run**: `spawn()` the loop and keep the returned handle for shutdown.
///
/// ## Operations
///
/// * **Select**: runs `SELECT <columns> FROM <table> ORDER BY rowid` and decodes
///   every row with [`TableRow::from_row`].
/// * **Append**: calls [`TableRow::on_append`]; on success inserts the values
///   from [`TableRow::to_values`].
pub struct TableActor<T: TableRow> {
    receiver: mpsc::Receiver<TableRequest<T>>,
    conn: Connection,
    table: TableName,
}

impl<T: TableRow> TableActor<T> {
    /// Creates a new `TableActor` and its associated `TableClient`.
    ///
    /// # Arguments
    ///
    /// * `conn` - The connection this actor will own exclusively.
    /// * `table` - The table served by this actor.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(conn: Connection, table: TableName, buffer_size: usize) -> (Self, TableClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            conn,
            table,
        };
        (actor, TableClient::new(sender))
    }

    /// Creates the table from [`TableRow::COLUMNS`] unless it already exists.
    pub fn ensure_table(&self) -> Result<(), TableError> {
        let columns = T::COLUMNS
            .iter()
            .map(|c| format!("{} {}", c.name, c.sql_type))
            .collect::<Vec<_>>()
            .join(", ");
        self.conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} ({});",
            self.table, columns
        ))?;
        debug!(table = %self.table, "Table ready");
        Ok(())
    }

    /// Runs the actor on the blocking pool.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::task::spawn_blocking(move || self.run())
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// Blocks the calling thread. Must not be called from inside an async task.
    pub fn run(mut self) {
        let table = self.table.clone();
        info!(%table, "Actor started");
        let mut appended = 0usize;

        while let Some(msg) = self.receiver.blocking_recv() {
            match msg {
                TableRequest::Select { respond_to } => {
                    let result = self.select_all().map_err(TableError::from);
                    match &result {
                        Ok(rows) => debug!(%table, rows = rows.len(), "Select"),
                        Err(e) => warn!(%table, error = %e, "Select failed"),
                    }
                    let _ = respond_to.send(result);
                }
                TableRequest::Append { row, respond_to } => {
                    debug!(%table, ?row, "Append");
                    if let Err(e) = row.on_append() {
                        warn!(%table, error = %e, "on_append rejected row");
                        let _ = respond_to.send(Err(TableError::Rejected(Box::new(e))));
                        continue;
                    }
                    match self.insert(&row) {
                        Ok(()) => {
                            appended += 1;
                            info!(%table, appended, "Appended");
                            let _ = respond_to.send(Ok(()));
                        }
                        Err(e) => {
                            warn!(%table, error = %e, "Append failed");
                            let _ = respond_to.send(Err(TableError::Database(e)));
                        }
                    }
                }
            }
        }

        info!(%table, appended, "Shutdown");
    }

    fn column_list() -> String {
        T::COLUMNS
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn select_all(&self) -> rusqlite::Result<Vec<T>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY rowid",
            Self::column_list(),
            self.table
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map([], |row| T::from_row(row))?;
        rows.collect()
    }

    fn insert(&self, row: &T) -> rusqlite::Result<()> {
        let placeholders = (1..=T::COLUMNS.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            Self::column_list(),
            placeholders
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;
        stmt.execute(params_from_iter(row.to_values()))?;
        Ok(())
    }
}
