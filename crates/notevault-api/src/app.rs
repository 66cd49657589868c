//! Application builder: wires router, middleware, and state into an Axum app,
//! and runs the server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use notevault_auth::{
    MemoryCredentialStore, MemoryRevocationRegistry, PasswordCredentialManager, RevocationSweeper,
};
use notevault_core::config::AppConfig;
use notevault_core::error::AppError;
use notevault_core::traits::RevocationStore;

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the NoteVault server until Ctrl+C.
///
/// Credentials and revocations are kept in memory.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting NoteVault server...");

    let passwords = Arc::new(PasswordCredentialManager::new(&config.auth)?);
    let revocations: Arc<dyn RevocationStore> = Arc::new(MemoryRevocationRegistry::new());
    let credentials = Arc::new(MemoryCredentialStore::new());

    let sweeper = RevocationSweeper::new(
        Arc::clone(&revocations),
        Duration::from_secs(config.auth.revocation_sweep_interval_seconds),
    );
    let sweeper_handle = sweeper.spawn();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, credentials, revocations, passwords)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("NoteVault server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(handle) = sweeper_handle {
        handle.abort();
    }

    info!("NoteVault server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
