//! quiz-service server entry point.
//!
//! Loads configuration, prepares the question store, and starts the Axum
//! HTTP server.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use quiz_service::app_state::AppState;
use quiz_service::build_app;
use quiz_service::config::{LogFormat, QuizConfig};
use quiz_service::persistence::{MemoryQuizStore, PostgresQuizStore, QuizStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = QuizConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    tracing::info!(addr = %config.listen_addr, "starting quiz-service");

    // Build persistence layer
    let store: Arc<dyn QuizStore> = if config.persistence_enabled {
        Arc::new(PostgresQuizStore::connect(&config).await?)
    } else {
        tracing::warn!("persistence disabled; questions are kept in memory");
        Arc::new(MemoryQuizStore::new())
    };
    store.initialize().await?;
    tracing::info!(healthy = store.health_check().await, "database health check");

    // Build router
    let app = build_app(AppState::new(store));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
