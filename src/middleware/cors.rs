//! Cross-origin policy for the browser frontends.

use axum::http::{
    HeaderValue, Method,
    header::InvalidHeaderValue,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Build the CORS layer.
///
/// - Only the listed origins are allowed (echoed back, never `*`)
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Credentials (cookies, Authorization) are allowed
/// - Requested headers are mirrored back on preflight
///
/// # Errors
///
/// Returns an error if an origin is not a valid header value.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
