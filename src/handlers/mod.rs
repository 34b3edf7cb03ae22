//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Calls into the document store
//! 3. Returns HTTP response (JSON, status code)

/// Authentication group status endpoint
pub mod auth;
/// Generic document collection endpoints
pub mod documents;
/// 404 handler for unmatched routes
pub mod fallback;
/// Service health check
pub mod health;
/// API capability listing
pub mod root;
