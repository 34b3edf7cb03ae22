//! Authentication route group.
//!
//! Only reports whether a JWT signing secret is configured; issuing and
//! verifying tokens is handled elsewhere.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::handlers::fallback::route_not_found;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(auth_status))
        .method_not_allowed_fallback(route_not_found)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub jwt_secret_configured: bool,
}

/// `GET /api/auth/status`
pub async fn auth_status(State(state): State<AppState>) -> Json<AuthStatus> {
    Json(AuthStatus {
        jwt_secret_configured: state.jwt_secret_configured,
    })
}
