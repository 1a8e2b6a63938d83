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
pub struct MoviePayload {
    pub title: String,
}

/// GET /movies
pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let movies = store::movies::find_all(&state.pool).await?;
    if movies.is_empty() {
        return Err(ApiError::not_found("No movies found"));
    }
    Ok(Json(movies).into_response())
}

/// GET /movies/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let movie = store::movies::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Movie not found"))?;
    Ok(Json(movie).into_response())
}

/// POST /movies (admin)
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MoviePayload>,
) -> Result<Response, ApiError> {
    let movie = store::movies::create(&state.pool, &payload.title).await?;
    Ok(Json(json!({ "message": "Movie created", "movie": movie })).into_response())
}

/// PUT /movies/:id (admin)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MoviePayload>,
) -> Result<Response, ApiError> {
    let movie = require_row(
        store::movies::update(&state.pool, id, &payload.title).await?,
        "Movie not found",
    )?;
    Ok(Json(json!({ "message": "Movie updated", "movie": movie })).into_response())
}

/// DELETE /movies/:id (admin)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    require_rows(store::movies::delete(&state.pool, id).await?, "Movie not found")?;
    Ok("Movie deleted".into_response())
}
