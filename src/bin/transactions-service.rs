//! Transactions service entry point.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. Build the peer client for the accounts service
//! 4. Build the HTTP router with shared state
//! 5. Start the server on the configured port

use std::sync::Arc;
use std::time::Duration;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use banking_records::config::TransactionsConfig;
use banking_records::gateway::PeerClient;
use banking_records::handlers::transactions::{self, TransactionsState};
use banking_records::store::Table;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = TransactionsConfig::from_env()?;
    tracing::info!("Configuration loaded");

    let accounts = PeerClient::new(
        &config.accounts_service_url,
        Duration::from_millis(config.peer_timeout_ms),
    )?;

    let state = TransactionsState {
        transactions: Arc::new(Table::new()),
        accounts,
    };

    let app = transactions::router(state).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Transactions service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
