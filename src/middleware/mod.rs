//! HTTP middleware components.
//!
//! Middleware run around route handlers. They can:
//! - Apply the cross-origin policy
//! - Log server errors and shape the 500 response
//! - Turn handler panics into responses

/// Cross-origin resource sharing policy
pub mod cors;
/// Generic server error handling and panic recovery
pub mod errors;
