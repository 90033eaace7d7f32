//! Standard CRUD handlers shared by every entity controller except
//! Employee.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::common::Resource;

use crate::shared::error::{AppError, AppResult};
use crate::shared::state::AppState;
use crate::shared::store::flat_row;

/// GET /{Entity}/Get{Plural}
pub async fn list<T: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<T>>> {
    Ok(Json(state.store.all_expanded::<T>()))
}

/// GET /{Entity}/Get{Entity}/:id
pub async fn get_by_id<T: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<T>> {
    state
        .store
        .find_expanded::<T>(id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(T::NAME, id))
}

/// POST /{Entity}/Insert{Entity}
///
/// Derived fields are recomputed here; the client values are a preview.
pub async fn insert<T: Resource>(
    State(state): State<AppState>,
    Json(mut entity): Json<T>,
) -> AppResult<(StatusCode, Json<T>)> {
    entity.set_id(0);
    entity.recompute_derived();
    let saved = state.store.insert_entity(&entity)?;
    let id = saved.id().unwrap_or_default();
    tracing::info!("Inserted {} {}", T::NAME, id);

    let body = state.store.find_expanded::<T>(id).unwrap_or(saved);
    Ok((StatusCode::CREATED, Json(body)))
}

/// PUT /{Entity}/Update{Entity}/:id
///
/// The id in the path wins over any id in the body.
pub async fn update<T: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut entity): Json<T>,
) -> AppResult<Json<T>> {
    entity.set_id(id);
    entity.recompute_derived();
    if !state
        .store
        .update(T::NAME, T::ID_FIELD, id, flat_row(&entity)?)
    {
        return Err(AppError::not_found(T::NAME, id));
    }
    tracing::info!("Updated {} {}", T::NAME, id);

    state
        .store
        .find_expanded::<T>(id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(T::NAME, id))
}

/// DELETE /{Entity}/Delete{Entity}/:id
pub async fn delete<T: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if !state.store.delete(T::NAME, id) {
        return Err(AppError::not_found(T::NAME, id));
    }
    tracing::info!("Deleted {} {}", T::NAME, id);
    Ok(StatusCode::NO_CONTENT)
}
