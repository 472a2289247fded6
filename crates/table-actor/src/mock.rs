//! # Mock Framework
//!
//! Utilities for testing domain clients without opening a database.
//!
//! ## Fluent expectations
//!
//! [`MockTable`] hands out a real [`TableClient`] whose requests are answered
//! from a queue of expectations. Rows sent with `append` are recorded so tests
//! can assert on exactly what would have been written.
//!
//! ```rust,ignore
//! let mut mock = MockTable::<Order>::new();
//! mock.expect_append().return_ok();
//!
//! let client = OrderClient::new(mock.client());
//! client.submit_order(order).await?;
//!
//! assert_eq!(mock.appended().len(), 1);
//! mock.verify();
//! ```
//!
//! ## Channel-level helpers
//!
//! Use [`create_mock_client`] to get a client and the raw receiver, then
//! [`expect_select`] / [`expect_append`] to pull requests off it and answer
//! them by hand. This is useful for asserting on in-flight requests.

use crate::client::TableClient;
use crate::error::TableError;
use crate::message::TableRequest;
use crate::row::TableRow;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned response to send back.
enum Expectation<T: TableRow> {
    Select {
        response: Result<Vec<T>, TableError>,
    },
    Append {
        response: Result<(), TableError>,
    },
}

/// A mock table with expectation tracking for fluent testing.
pub struct MockTable<T: TableRow> {
    client: TableClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    appended: Arc<Mutex<Vec<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: TableRow> Default for MockTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableRow> MockTable<T> {
    /// Creates a new mock table with no expectations.
    ///
    /// Must be called from inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<TableRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let appended = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let appended_clone = appended.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        TableRequest::Select { respond_to },
                        Some(Expectation::Select { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        TableRequest::Append { row, respond_to },
                        Some(Expectation::Append { response }),
                    ) => {
                        if response.is_ok() {
                            appended_clone.lock().unwrap().push(row);
                        }
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: TableClient::new(sender),
            expectations,
            appended,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> TableClient<T> {
        self.client.clone()
    }

    /// Expects a `select_all` operation.
    pub fn expect_select(&mut self) -> SelectExpectationBuilder<T> {
        SelectExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `append` operation.
    pub fn expect_append(&mut self) -> AppendExpectationBuilder<T> {
        AppendExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Rows accepted by successful `append` expectations, in arrival order.
    pub fn appended(&self) -> Vec<T> {
        self.appended.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `select_all` expectations.
pub struct SelectExpectationBuilder<T: TableRow> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: TableRow> SelectExpectationBuilder<T> {
    /// Sets the expectation to return these rows.
    pub fn return_ok(self, rows: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Select { response: Ok(rows) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: TableError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Select {
                response: Err(error),
            });
    }
}

/// Builder for `append` expectations.
pub struct AppendExpectationBuilder<T: TableRow> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: TableRow> AppendExpectationBuilder<T> {
    /// Sets the expectation to accept the row.
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Append { response: Ok(()) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: TableError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Append {
                response: Err(error),
            });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: TableRow>(
    buffer_size: usize,
) -> (TableClient<T>, mpsc::Receiver<TableRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (TableClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Select request.
pub async fn expect_select<T: TableRow>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, TableError>>> {
    match receiver.recv().await {
        Some(TableRequest::Select { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Append request.
pub async fn expect_append<T: TableRow>(
    receiver: &mut mpsc::Receiver<TableRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<(), TableError>>)> {
    match receiver.recv().await {
        Some(TableRequest::Append { row, respond_to }) => Some((row, respond_to)),
        _ => None,
    }
}
