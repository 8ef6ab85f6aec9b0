//! Record HTTP Handlers
//!
//! Generic CRUD handlers shared by the service, confirmation, and report
//! collections. Each route instantiates them for one record type, e.g.
//! `get(list_records::<Service>)`; the store comes out of `AppState`
//! through `FromRef`.
//!
//! All of these run behind the auth middleware. Handlers that mutate
//! take [`AuthUser`] so the acting principal ends up in the log. Path and
//! body extraction failures come back through [`BackendError`] as JSON.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use std::sync::Arc;

use super::store::{JsonRecordStore, Record};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// List every record in the collection, ordered by id
pub async fn list_records<R: Record>(
    State(store): State<Arc<JsonRecordStore<R>>>,
) -> Json<Vec<R>> {
    Json(store.list().await)
}

/// Fetch one record
pub async fn get_record<R: Record>(
    State(store): State<Arc<JsonRecordStore<R>>>,
    path: Result<Path<R::Id>, PathRejection>,
) -> Result<Json<R>, BackendError> {
    let Path(id) = path?;
    store
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| BackendError::not_found(R::NOT_FOUND))
}

/// Create a record, replacing any existing record with the same id
pub async fn create_record<R: Record>(
    AuthUser(principal): AuthUser,
    State(store): State<Arc<JsonRecordStore<R>>>,
    body: Result<Json<R>, JsonRejection>,
) -> Result<Json<R>, BackendError> {
    let Json(record) = body?;
    let record = store.upsert(record).await?;

    tracing::info!(
        "{} {} saved by {}",
        R::COLLECTION,
        record.id(),
        principal.username
    );

    Ok(Json(record))
}

/// Replace an existing record; the id in the path wins over the body
pub async fn update_record<R: Record>(
    AuthUser(principal): AuthUser,
    State(store): State<Arc<JsonRecordStore<R>>>,
    path: Result<Path<R::Id>, PathRejection>,
    body: Result<Json<R>, JsonRejection>,
) -> Result<Json<R>, BackendError> {
    let Path(id) = path?;
    let Json(record) = body?;
    let updated = store
        .replace(id, record)
        .await?
        .ok_or_else(|| BackendError::not_found(R::NOT_FOUND))?;

    tracing::info!("{} {} updated by {}", R::COLLECTION, id, principal.username);

    Ok(Json(updated))
}

/// Delete a record and return it
pub async fn delete_record<R: Record>(
    AuthUser(principal): AuthUser,
    State(store): State<Arc<JsonRecordStore<R>>>,
    path: Result<Path<R::Id>, PathRejection>,
) -> Result<Json<R>, BackendError> {
    let Path(id) = path?;
    let removed = store
        .remove(id)
        .await?
        .ok_or_else(|| BackendError::not_found(R::NOT_FOUND))?;

    tracing::info!("{} {} deleted by {}", R::COLLECTION, id, principal.username);

    Ok(Json(removed))
}
