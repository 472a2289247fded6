use crate::clients::{CatalogClient, OrderClient};
use crate::config::AppConfig;
use crate::{catalog_actor, order_actor};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use table_actor::TableError;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// How long a connection waits for the other table's write lock.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to open database: {0}")]
    Open(#[from] rusqlite::Error),
    #[error("Failed to prepare table: {0}")]
    Table(#[from] TableError),
}

/// Both table actors and the clients that talk to them.
pub struct SmoothieSystem {
    pub catalog_client: CatalogClient,
    pub order_client: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl SmoothieSystem {
    /// Opens the database at `config.database_path` and starts both actors.
    #[instrument(skip(config), fields(path = %config.database_path.display()))]
    pub fn open(config: &AppConfig) -> Result<Self, SystemError> {
        let (catalog_actor, catalog_client) = catalog_actor::new(
            connect(&config.database_path)?,
            config.fruit_table.clone(),
            config.channel_buffer,
        )?;
        let (order_actor, order_client) = order_actor::new(
            connect(&config.database_path)?,
            config.order_table.clone(),
            config.channel_buffer,
        )?;

        let handles = vec![catalog_actor.spawn(), order_actor.spawn()];
        info!("Smoothie system started");

        Ok(Self {
            catalog_client: CatalogClient::new(catalog_client),
            order_client: OrderClient::new(order_client),
            handles,
        })
    }

    /// Drops this system's clients and waits for both actors to finish.
    pub async fn shutdown(self) {
        drop(self.catalog_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
            }
        }
        info!("Smoothie system stopped");
    }
}

fn connect(path: &Path) -> Result<Connection, rusqlite::Error> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;

    fn config_for(dir: &tempfile::TempDir) -> AppConfig {
        let path = dir.path().join("smoothies.db");
        AppConfig::from_lookup(move |name| {
            (name == crate::config::ENV_DATABASE_PATH).then(|| path.display().to_string())
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_open_write_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir);

        let system = SmoothieSystem::open(&config).unwrap();
        system.catalog_client.add_fruit("Banana").await.unwrap();
        system
            .order_client
            .submit_order(Order {
                ingredients: "Banana".to_string(),
                name_on_order: "Alice".to_string(),
            })
            .await
            .unwrap();
        system.shutdown().await;

        let system = SmoothieSystem::open(&config).unwrap();
        assert_eq!(system.catalog_client.fruit_names().await.unwrap(), ["Banana"]);
        assert_eq!(system.order_client.orders().await.unwrap().len(), 1);
        system.shutdown().await;
    }

    #[tokio::test]
    async fn test_unopenable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("smoothies.db");
        let config = AppConfig::from_lookup(move |name| {
            (name == crate::config::ENV_DATABASE_PATH).then(|| path.display().to_string())
        })
        .unwrap();

        assert!(matches!(
            SmoothieSystem::open(&config),
            Err(SystemError::Open(_))
        ));
    }
}
