//! Catch-all handler for requests no route (or static file) matched.

use axum::{
    Json,
    extract::OriginalUri,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RouteNotFound {
    pub message: &'static str,
    #[serde(rename = "requestedUrl")]
    pub requested_url: String,
}

/// Respond 404 with the URL as the client sent it, query string included.
///
/// Uses `OriginalUri` so requests that went through a nested service (the
/// uploads directory) still report their full path.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFound {
            message: "Route not found",
            requested_url: requested_url(&uri),
        }),
    )
}

fn requested_url(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_url_keeps_query_string() {
        let uri: Uri = "/api/nope?page=2".parse().unwrap();
        assert_eq!(requested_url(&uri), "/api/nope?page=2");
    }

    #[test]
    fn requested_url_drops_scheme_and_host() {
        let uri: Uri = "http://localhost:5000/missing".parse().unwrap();
        assert_eq!(requested_url(&uri), "/missing");
    }
}
