//! Document service - persistence for the resource collections.
//!
//! This service handles:
//! - Creating, listing, fetching, replacing and deleting documents
//! - Scoping every query to one collection
//!
//! Handlers talk to the [`DocumentStore`] trait so the HTTP layer can run
//! against a different backend (tests use an in-memory store).

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{db::DbPool, error::AppError, models::document::Document};

/// Storage backend for schemaless documents grouped in collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a new document and return it with its generated id and timestamps.
    async fn insert(&self, collection: &str, body: Map<String, Value>)
    -> Result<Document, AppError>;

    /// List documents of a collection, newest first.
    async fn list(&self, collection: &str, limit: i64, skip: i64)
    -> Result<Vec<Document>, AppError>;

    /// Fetch one document. `None` if it does not exist in this collection.
    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Document>, AppError>;

    /// Replace the body of a document. `None` if it does not exist in this collection.
    async fn replace(
        &self,
        collection: &str,
        id: Uuid,
        body: Map<String, Value>,
    ) -> Result<Option<Document>, AppError>;

    /// Delete a document. Returns whether a document was removed.
    async fn delete(&self, collection: &str, id: Uuid) -> Result<bool, AppError>;

    /// Verify the backend is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}

/// PostgreSQL-backed document store (JSONB `documents` table).
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(
        &self,
        collection: &str,
        body: Map<String, Value>,
    ) -> Result<Document, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (id, collection, body)
            VALUES ($1, $2, $3)
            RETURNING id, collection, body, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(collection)
        .bind(Value::Object(body))
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    async fn list(
        &self,
        collection: &str,
        limit: i64,
        skip: i64,
    ) -> Result<Vec<Document>, AppError> {
        let documents = sqlx::query_as::<_, Document>(
            r#"
            SELECT id, collection, body, created_at, updated_at
            FROM documents
            WHERE collection = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(collection)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(documents)
    }

    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            SELECT id, collection, body, created_at, updated_at
            FROM documents
            WHERE id = $1 AND collection = $2
            "#,
        )
        .bind(id)
        // A document is only visible through its own collection
        .bind(collection)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    async fn replace(
        &self,
        collection: &str,
        id: Uuid,
        body: Map<String, Value>,
    ) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            UPDATE documents
            SET body = $1,
                updated_at = NOW()
            WHERE id = $2 AND collection = $3
            RETURNING id, collection, body, created_at, updated_at
            "#,
        )
        .bind(Value::Object(body))
        .bind(id)
        .bind(collection)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    async fn delete(&self, collection: &str, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1 AND collection = $2")
            .bind(id)
            .bind(collection)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        crate::db::ping(&self.pool).await?;
        Ok(())
    }
}
