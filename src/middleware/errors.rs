//! Generic server error handling.
//!
//! Handlers never build 500 bodies with details themselves. They return
//! [`AppError`] (or panic), which yields a generic 500 tagged with
//! [`ServerErrorDetail`]. This middleware runs last on the way out:
//! 1. Logs the detail together with the request method and URI
//! 2. In development, re-renders the body with the `error` field filled in
//!
//! 5xx responses without a tag (a bare status from a handler or a layer) are
//! logged too and get the same generic JSON body, keeping their status code.

use std::any::Any;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::Environment;
use crate::error::{AppError, ServerErrorDetail, server_error_response};

/// Error middleware; install with `from_fn_with_state(environment, ...)`.
pub async fn handle_server_errors(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let Some(ServerErrorDetail(detail)) = response.extensions().get::<ServerErrorDetail>().cloned()
    else {
        if !response.status().is_server_error() {
            return response;
        }

        let status = response.status();
        let detail = format!("{status} response without error detail");
        tracing::error!(%method, %uri, %status, error = %detail, "Server error");

        let mut rendered = server_error_response(detail, environment.is_development());
        *rendered.status_mut() = status;
        return rendered;
    };

    tracing::error!(%method, %uri, error = %detail, "Server error");

    if environment.is_development() {
        server_error_response(detail, true)
    } else {
        response
    }
}

/// Panic handler for `CatchPanicLayer::custom`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    AppError::Panic(panic_message(payload.as_ref())).into_response()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    }
}
