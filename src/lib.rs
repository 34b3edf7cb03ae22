//! RideShare API server.
//!
//! HTTP backend for a ride-sharing web application: a JSON API made of
//! eight route groups, a static uploads directory and a shared error
//! handling tier.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, documents stored as JSONB
//! - **Format**: JSON requests/responses
//!
//! # Middleware Order (outermost first)
//!
//! 1. CORS
//! 2. Request tracing
//! 3. Server error handler (logs, gates error detail on the environment)
//! 4. Panic recovery
//! 5. JSON body size limit
//! 6. Routes, `/uploads` static files, 404 fallback
//!
//! The whole router is wrapped in trailing-slash normalization, so
//! `/api/rides/` and `/api/rides` reach the same handler.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    http::header::InvalidHeaderValue,
    middleware as axum_middleware,
    routing::get,
};
use tower::Layer;
use tower_http::{
    catch_panic::CatchPanicLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::state::AppState;

/// The application service: the router behind trailing-slash normalization.
///
/// Serve it with `axum::ServiceExt::<Request>::into_make_service`.
pub type App = NormalizePath<Router>;

/// Build the full application router.
///
/// # Errors
///
/// Returns an error if a configured CORS origin is not a valid header value.
pub fn build_app(config: &Config, state: AppState) -> Result<App, InvalidHeaderValue> {
    let cors = middleware::cors::cors_layer(&config.cors_origins)?;
    let environment = state.environment;

    // Missing files and non-GET methods fall through to the JSON 404
    let uploads = ServeDir::new(&config.uploads_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::fallback::route_not_found.into_service());

    let app = Router::new()
        .route("/", get(handlers::root::api_index))
        .route("/health", get(handlers::health::health_check))
        .nest_service("/uploads", uploads)
        .merge(routes::api_router())
        .fallback(handlers::fallback::route_not_found)
        // Known path, unsupported method: same JSON 404 as an unknown path
        .method_not_allowed_fallback(handlers::fallback::route_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.json_body_limit))
        .layer(CatchPanicLayer::custom(middleware::errors::handle_panic))
        .layer(axum_middleware::from_fn_with_state(
            environment,
            middleware::errors::handle_server_errors,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Routing happens before Router::layer middleware runs, so the path
    // must be normalized outside the router
    Ok(NormalizePathLayer::trim_trailing_slash().layer(app))
}
