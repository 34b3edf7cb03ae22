//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.
//!
//! Server-side failures are rendered with a generic message and tagged with
//! a [`ServerErrorDetail`] extension. The error middleware in
//! [`crate::middleware::errors`] picks that tag up, logs it and decides
//! whether the detail is exposed to the client.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for every 500 response.
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong!";

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Database Errors**: any sqlx::Error, or no database configured at all
/// - **Resource Errors**: requested document not found
/// - **Validation Errors**: invalid ids, bodies or malformed JSON
/// - **Panics**: a handler panicked and the panic was caught
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No database connection was configured.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Database unavailable: MONGO_URI is not configured")]
    DatabaseUnavailable,

    /// Requested resource does not exist.
    ///
    /// Returns HTTP 404 Not Found. The String names the resource kind.
    #[error("{0} not found")]
    NotFound(String),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Request body could not be parsed as JSON.
    ///
    /// Keeps the status chosen by axum (400, 413, 415 or 422).
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] JsonRejection),

    /// A handler panicked.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Handler panicked: {0}")]
    Panic(String),
}

/// JSON body shared by all error responses.
///
/// ```json
/// {
///   "message": "Something went wrong!",
///   "error": "Database error: ..."
/// }
/// ```
///
/// `error` is only present on server errors in development mode.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Underlying cause of a 500 response, attached as a response extension.
#[derive(Debug, Clone)]
pub struct ServerErrorDetail(pub String);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidJson(rejection) => rejection.status(),
            AppError::Database(_) | AppError::DatabaseUnavailable | AppError::Panic(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Build the generic 500 response, optionally exposing the cause.
///
/// The cause is always attached as [`ServerErrorDetail`] so the error
/// middleware can log it.
pub fn server_error_response(detail: String, expose: bool) -> Response {
    let body = ErrorBody {
        message: SERVER_ERROR_MESSAGE.to_string(),
        error: expose.then(|| detail.clone()),
    };

    let mut response = (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
    response.extensions_mut().insert(ServerErrorDetail(detail));
    response
}

/// Convert AppError into an HTTP response.
///
/// # Status Code Mapping
///
/// - `NotFound` → 404 Not Found
/// - `InvalidRequest` → 400 Bad Request
/// - `InvalidJson` → status of the JSON rejection
/// - `Database`, `DatabaseUnavailable`, `Panic` → 500 (details hidden from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            return server_error_response(self.to_string(), false);
        }

        let message = match self {
            AppError::InvalidJson(ref rejection) => rejection.body_text(),
            _ => self.to_string(),
        };

        (
            status,
            Json(ErrorBody {
                message,
                error: None,
            }),
        )
            .into_response()
    }
}
