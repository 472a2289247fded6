//! # Catalog Client
//!
//! Provides a high-level API for the fruit catalog table.
use crate::catalog_actor::CatalogError;
use crate::model::FruitOption;
use async_trait::async_trait;
use table_actor::{TableAccess, TableClient, TableError};
use tracing::{debug, info, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: TableClient<FruitOption>,
}

impl CatalogClient {
    pub fn new(inner: TableClient<FruitOption>) -> Self {
        Self { inner }
    }

    /// `SELECT FRUIT_NAME FROM <catalog>` as plain strings.
    #[instrument(skip(self))]
    pub async fn fruit_names(&self) -> Result<Vec<String>, CatalogError> {
        let rows = self.rows().await?;
        debug!(count = rows.len(), "Fetched fruit options");
        Ok(rows.into_iter().map(|fruit| fruit.name).collect())
    }

    #[instrument(skip(self))]
    pub async fn add_fruit(&self, name: &str) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.inner
            .append(FruitOption::new(name))
            .await
            .map_err(CatalogError::from)
    }

    /// Appends `fruits` only when the catalog is empty.
    ///
    /// Returns how many fruits were added.
    #[instrument(skip(self, fruits))]
    pub async fn seed(&self, fruits: &[String]) -> Result<usize, CatalogError> {
        if !self.rows().await?.is_empty() {
            info!("Catalog already populated, skipping seed");
            return Ok(0);
        }
        for name in fruits {
            self.add_fruit(name).await?;
        }
        info!(count = fruits.len(), "Seeded catalog");
        Ok(fruits.len())
    }
}

#[async_trait]
impl TableAccess<FruitOption> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &TableClient<FruitOption> {
        &self.inner
    }

    fn map_error(e: TableError) -> Self::Error {
        CatalogError::from(e)
    }
}
