//! Document collection HTTP handlers.
//!
//! Every resource group (rides, users, bookings, payments, payouts,
//! webhooks, receipts) exposes the same endpoints over its own collection:
//! - GET /api/<group> - List documents (newest first)
//! - POST /api/<group> - Create a document
//! - GET /api/<group>/{id} - Get a document
//! - PUT /api/<group>/{id} - Replace a document
//! - DELETE /api/<group>/{id} - Delete a document
//!
//! The group is injected as a request extension by [`router`].

use axum::{
    Extension, Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    error::AppError,
    handlers::fallback::route_not_found,
    models::document::{DocumentResponse, ListQuery, into_object},
    routes::RouteGroup,
    state::AppState,
};

/// Sub-router for one document collection.
pub fn router(group: RouteGroup) -> Router<AppState> {
    Router::new()
        .route("/", get(list_documents).post(create_document))
        .route(
            "/{id}",
            get(get_document)
                .put(replace_document)
                .delete(delete_document),
        )
        .method_not_allowed_fallback(route_not_found)
        .route_layer(Extension(group))
}

/// List documents of the group's collection.
///
/// # Query Parameters
///
/// - `limit`: page size, 1 to 100 (default 50)
/// - `skip`: number of documents to skip (default 0)
pub async fn list_documents(
    State(state): State<AppState>,
    Extension(group): Extension<RouteGroup>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<DocumentResponse>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let documents = state
        .store()?
        .list(group.name(), query.limit(), query.skip())
        .await?;

    Ok(Json(documents.into_iter().map(Into::into).collect()))
}

/// Create a document.
///
/// # Request Body
///
/// Any JSON object:
///
/// ```json
/// { "origin": "Pune", "destination": "Mumbai", "seats": 3 }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the stored document
/// - **Error (400)**: body is not a JSON object or is malformed
pub async fn create_document(
    State(state): State<AppState>,
    Extension(group): Extension<RouteGroup>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = object_body(payload)?;

    let document = state.store()?.insert(group.name(), body).await?;
    tracing::debug!(collection = group.name(), id = %document.id, "document created");

    Ok((StatusCode::CREATED, Json(DocumentResponse::from(document))))
}

/// Get one document by id.
///
/// Returns 404 if the document does not exist in this group's collection.
pub async fn get_document(
    State(state): State<AppState>,
    Extension(group): Extension<RouteGroup>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<DocumentResponse>, AppError> {
    let id = document_id(id)?;

    let document = state
        .store()?
        .get(group.name(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(group.resource().to_string()))?;

    Ok(Json(document.into()))
}

/// Replace the body of a document.
pub async fn replace_document(
    State(state): State<AppState>,
    Extension(group): Extension<RouteGroup>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DocumentResponse>, AppError> {
    let id = document_id(id)?;
    let body = object_body(payload)?;

    let document = state
        .store()?
        .replace(group.name(), id, body)
        .await?
        .ok_or_else(|| AppError::NotFound(group.resource().to_string()))?;

    Ok(Json(document.into()))
}

/// Delete a document.
///
/// Returns 204 No Content on success, 404 if it does not exist.
pub async fn delete_document(
    State(state): State<AppState>,
    Extension(group): Extension<RouteGroup>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = document_id(id)?;

    if !state.store()?.delete(group.name(), id).await? {
        return Err(AppError::NotFound(group.resource().to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn document_id(id: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, AppError> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::InvalidRequest("Invalid document id".to_string()))
}

fn object_body(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Map<String, Value>, AppError> {
    let Json(value) = payload?;
    into_object(value)
        .ok_or_else(|| AppError::InvalidRequest("Document body must be a JSON object".to_string()))
}
