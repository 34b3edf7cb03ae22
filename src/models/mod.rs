//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Schemaless document model backing the resource collections
pub mod document;
