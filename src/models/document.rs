//! Document data models and API request/response types.
//!
//! This module defines:
//! - `Document`: Database entity representing a stored JSON document
//! - `DocumentResponse`: Response body returned to clients
//! - `ListQuery`: Pagination parameters for collection listings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Default page size for collection listings.
pub const DEFAULT_LIMIT: i64 = 50;

/// Largest page size a client may request.
pub const MAX_LIMIT: i64 = 100;

/// Represents a document record from the database.
///
/// # Database Table
///
/// Maps to the `documents` table. Each document:
/// - Belongs to one collection (the route group it was created through)
/// - Stores its fields as a JSON object (JSONB column)
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Document {
    /// Unique identifier for this document
    pub id: Uuid,

    /// Collection name, e.g. "rides" or "bookings"
    pub collection: String,

    /// Document fields
    ///
    /// Always a JSON object (enforced by a database CHECK constraint).
    pub body: Value,

    /// Timestamp when the document was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last replacement
    pub updated_at: DateTime<Utc>,
}

/// Response body for document endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "data": { "origin": "Pune", "destination": "Mumbai", "seats": 3 },
///   "created_at": "2025-12-20T10:00:00Z",
///   "updated_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Convert database Document to API DocumentResponse.
///
/// Drops the internal `collection` field, which is implied by the URL.
impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            id: document.id,
            data: document.body,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}

/// Query parameters for listing a collection.
///
/// `GET /api/rides?limit=20&skip=40`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

impl ListQuery {
    /// Page size clamped to `1..=MAX_LIMIT`.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Number of documents to skip, never negative.
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }
}

/// Accept only JSON objects as document bodies.
pub fn into_object(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_query_defaults_and_clamps() {
        let query = ListQuery::default();
        assert_eq!(query.limit(), DEFAULT_LIMIT);
        assert_eq!(query.skip(), 0);

        let query = ListQuery {
            limit: Some(10_000),
            skip: Some(-5),
        };
        assert_eq!(query.limit(), MAX_LIMIT);
        assert_eq!(query.skip(), 0);

        let query = ListQuery {
            limit: Some(0),
            skip: Some(7),
        };
        assert_eq!(query.limit(), 1);
        assert_eq!(query.skip(), 7);
    }

    #[test]
    fn only_objects_are_documents() {
        assert!(into_object(json!({"seats": 2})).is_some());
        assert!(into_object(json!([1, 2, 3])).is_none());
        assert!(into_object(json!("ride")).is_none());
        assert!(into_object(Value::Null).is_none());
    }

    #[test]
    fn response_drops_collection() {
        let now = Utc::now();
        let document = Document {
            id: Uuid::new_v4(),
            collection: "rides".to_string(),
            body: json!({"seats": 3}),
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(DocumentResponse::from(document)).unwrap();
        assert_eq!(value["data"]["seats"], 3);
        assert!(value.get("collection").is_none());
    }
}
