//! RideShare API - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Report whether the JWT secret is present
//! 3. Create the database pool and connect in the background
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port (regardless of database outcome)

use std::{path::Path, sync::Arc};

use axum::{ServiceExt, extract::Request};
use rideshare_api::{
    build_app,
    config::Config,
    db,
    services::document_service::{DocumentStore, PgDocumentStore},
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the subscriber so RUST_LOG from the file applies
    dotenvy::dotenv().ok();

    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(environment = ?config.environment(), "Configuration loaded");

    if config.jwt_secret_configured() {
        tracing::info!("JWT_SECRET loaded: YES");
    } else {
        tracing::warn!("JWT_SECRET loaded: NO");
    }

    if !Path::new(&config.uploads_dir).is_dir() {
        tracing::warn!(dir = %config.uploads_dir, "Uploads directory does not exist");
    }

    let state = AppState {
        store: open_store(&config),
        environment: config.environment(),
        jwt_secret_configured: config.jwt_secret_configured(),
    };

    let app = build_app(&config, state)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on port {}", config.port);
    tracing::info!("API available at http://localhost:{}", config.port);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Create the document store and start connecting in the background.
///
/// Connection problems are logged, never fatal: without a usable
/// connection string the server runs with no store at all.
fn open_store(config: &Config) -> Option<Arc<dyn DocumentStore>> {
    let Some(uri) = config.mongo_uri.as_deref().filter(|uri| !uri.is_empty()) else {
        tracing::error!("Database connection error: MONGO_URI is not set");
        return None;
    };

    match db::create_pool(uri) {
        Ok(pool) => {
            db::spawn_connect(pool.clone());
            Some(Arc::new(PgDocumentStore::new(pool)))
        }
        Err(e) => {
            tracing::error!(error = %e, "Database connection error");
            None
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, starting graceful shutdown"),
        _ = terminate => tracing::info!("received SIGTERM, starting graceful shutdown"),
    }
}
