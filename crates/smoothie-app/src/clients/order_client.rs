//! # Order Client
//!
//! Provides a high-level API for the orders table.
use crate::model::Order;
use crate::order_actor::OrderError;
use async_trait::async_trait;
use table_actor::{TableAccess, TableClient, TableError};
use tracing::{debug, info, instrument};

/// Client for interacting with the order actor.
///
/// The invariant check runs again inside the actor (`Order::on_append`), so
/// a rejected order comes back as [`OrderError::Rejected`].
#[derive(Clone)]
pub struct OrderClient {
    inner: TableClient<Order>,
}

impl OrderClient {
    pub fn new(inner: TableClient<Order>) -> Self {
        Self { inner }
    }

    /// Appends one order row.
    #[instrument(skip(self, order))]
    pub async fn submit_order(&self, order: Order) -> Result<(), OrderError> {
        debug!(?order, "submit_order called");
        info!("Sending submit_order to actor");
        self.inner.append(order).await.map_err(OrderError::from)
    }

    /// Every stored order, oldest first.
    pub async fn orders(&self) -> Result<Vec<Order>, OrderError> {
        self.rows().await
    }
}

#[async_trait]
impl TableAccess<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &TableClient<Order> {
        &self.inner
    }

    fn map_error(e: TableError) -> Self::Error {
        OrderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderRejection;
    use table_actor::mock::{create_mock_client, expect_append, MockTable};

    fn order(ingredients: &str, name: &str) -> Order {
        Order {
            ingredients: ingredients.to_string(),
            name_on_order: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_order_sends_row_unchanged() {
        let (inner, mut receiver) = create_mock_client::<Order>(4);
        let client = OrderClient::new(inner);

        let task = tokio::spawn(async move {
            client.submit_order(order("Banana Mango", " Alice ")).await
        });

        let (row, responder) = expect_append(&mut receiver)
            .await
            .expect("Expected Append request");
        assert_eq!(row, order("Banana Mango", " Alice "));
        responder.send(Ok(())).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_submit_order_maps_rejection() {
        let mut mock = MockTable::<Order>::new();
        mock.expect_append()
            .return_err(TableError::Rejected(Box::new(OrderRejection::MissingName)));

        let client = OrderClient::new(mock.client());
        let err = client.submit_order(order("Kiwi", "  ")).await.unwrap_err();

        assert_eq!(err, OrderError::Rejected(OrderRejection::MissingName));
        assert!(mock.appended().is_empty());
        mock.verify();
    }
}
