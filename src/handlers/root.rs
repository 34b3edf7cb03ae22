//! API index served at `GET /`.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

use crate::routes::RouteGroup;

/// Public API version advertised by the index.
pub const API_VERSION: &str = "1.0.0";

/// Capability listing.
///
/// ```json
/// {
///   "message": "RideShare API is running",
///   "version": "1.0.0",
///   "endpoints": { "auth": "/api/auth", "rides": "/api/rides", ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiIndex {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

pub async fn api_index() -> Json<ApiIndex> {
    Json(ApiIndex {
        message: "RideShare API is running",
        version: API_VERSION,
        endpoints: RouteGroup::ALL
            .into_iter()
            .map(|group| (group.name(), group.prefix()))
            .collect(),
    })
}
