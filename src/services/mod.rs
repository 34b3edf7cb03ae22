//! Business logic services.
//!
//! Services contain persistence and domain logic separated from HTTP handlers.

pub mod document_service;
