//! # Smoothie Order Form
//!
//! Serves the order page over HTTP.
//!
//! 1. Read [`AppConfig`] from the environment.
//! 2. Start the [`SmoothieSystem`] (one actor per table) and seed the catalog.
//! 3. Serve the [`OrderForm`] until Ctrl-C, then stop the actors.

use smoothie_app::clients::FruitInfoClient;
use smoothie_app::config::AppConfig;
use smoothie_app::http::{build_router, AppState};
use smoothie_app::lifecycle::SmoothieSystem;
use smoothie_app::order_form::OrderForm;
use std::sync::Arc;
use table_actor::tracing::setup_tracing;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AppConfig::from_env()?;
    info!(config = %serde_json::to_string(&config)?, "Starting smoothie order form");

    let system = SmoothieSystem::open(&config)?;
    system.catalog_client.seed(&config.seed_fruits).await?;

    let fruit_info = FruitInfoClient::new(&config.fruit_api_base, config.fruit_api_timeout)?;
    let form = OrderForm::new(
        system.catalog_client.clone(),
        system.order_client.clone(),
        Arc::new(fruit_info),
    );
    let app = build_router(AppState::new(form));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl-C");
            }
            info!("Shutdown requested");
        })
        .await?;

    // The router (and its client clones) is gone once serve returns
    system.shutdown().await;
    info!("Application stopped");
    Ok(())
}
