use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::{require_row, require_rows};
use crate::error::ApiError;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorPayload {
    pub first_name: String,
}

/// GET /actors - every actor on file, soft-deleted included
pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let actors = store::actors::find_all(&state.pool).await?;
    if actors.is_empty() {
        return Err(ApiError::not_found("No actors found"));
    }
    Ok(Json(actors).into_response())
}

/// GET /actors/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let actor = store::actors::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Actor not found"))?;
    Ok(Json(actor).into_response())
}

/// POST /actors
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ActorPayload>,
) -> Result<Response, ApiError> {
    let actor = store::actors::create(&state.pool, &payload.first_name).await?;
    Ok(Json(json!({ "message": "Actor created", "actor": actor })).into_response())
}

/// PUT /actors/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ActorPayload>,
) -> Result<Response, ApiError> {
    let actor = require_row(
        store::actors::update(&state.pool, id, &payload.first_name).await?,
        "Actor not found",
    )?;
    Ok(Json(json!({ "message": "Actor updated", "actor": actor })).into_response())
}

/// DELETE /actors/:id - soft delete
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    require_rows(
        store::actors::soft_delete(&state.pool, id).await?,
        "Actor not found",
    )?;
    Ok("Actor deleted".into_response())
}

/// GET /actors/:id/movies - lazy loading: confirm the actor exists, then a
/// second query fetches its movies.
pub async fn movies_lazy(
    State(state): State<AppState>,
    Path(actor_id): Path<i64>,
) -> Result<Response, ApiError> {
    let actor = store::actors::find_by_id(&state.pool, actor_id).await?;
    if actor.is_none() {
        return Err(no_movies_for(actor_id));
    }

    let movies = store::actors::find_movies(&state.pool, actor_id).await?;
    Ok(Json(movies).into_response())
}

/// GET /actors/:id/movies-eager - eager loading: the association comes back
/// with the initial joined query.
pub async fn movies_eager(
    State(state): State<AppState>,
    Path(actor_id): Path<i64>,
) -> Result<Response, ApiError> {
    let movies = store::actors::find_movies_eager(&state.pool, actor_id)
        .await?
        .ok_or_else(|| no_movies_for(actor_id))?;
    Ok(Json(movies).into_response())
}

fn no_movies_for(actor_id: i64) -> ApiError {
    ApiError::not_found(format!("No movies found for actor with id {}", actor_id))
}
