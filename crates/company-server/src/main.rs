//! Entry point for the company-server binary.

use std::sync::Arc;

use company_core::TokenService;
use company_server::{
    config::ServerConfig,
    notify::{KafkaNotifier, Notifier},
    server::{build_app, init_tracing, shutdown_signal},
    state::AppState,
};
use company_store::{CompanyStore, PgCompanyStore, StoreConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level, config.log_format);

    tracing::info!("Starting company-server");
    tracing::info!(config = ?config, "Configuration loaded");

    let auth = TokenService::from_base64(&config.jwt_key).inspect_err(|e| {
        tracing::error!(error = %e, "Invalid JWT_KEY");
    })?;

    // Connect to database
    let store_config = StoreConfig::from_env()?;
    let store = Arc::new(PgCompanyStore::connect(store_config).await?);
    tracing::info!("Connected to database");

    // Connect to Kafka
    let notifier = Arc::new(
        KafkaNotifier::connect(
            config.kafka_hosts.clone(),
            config.kafka_topic.clone(),
            config.kafka_partition,
        )
        .await?,
    );

    // Build application state
    let state = AppState::new(store.clone(), Arc::new(auth), notifier.clone());
    let app = build_app(state);

    // Create listener
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    // Run server with graceful shutdown
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    store.close().await;
    notifier.close().await;

    served?;
    tracing::info!("Server shutdown complete");
    Ok(())
}
