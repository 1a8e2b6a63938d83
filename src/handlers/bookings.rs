use axum::{
    extract::{Extension, Path, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::{require_row, require_rows};
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub movie_id: i64,
    pub show_date: NaiveDate,
    pub seats: i32,
}

/// GET /bookings
pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let bookings = store::bookings::find_all(&state.pool).await?;
    if bookings.is_empty() {
        return Err(ApiError::not_found("No bookings found"));
    }
    Ok(Json(bookings).into_response())
}

/// GET /bookings/getMyBookings (auth)
pub async fn list_mine(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, ApiError> {
    let bookings = store::bookings::find_by_user(&state.pool, user.id).await?;
    if bookings.is_empty() {
        return Err(ApiError::not_found("No bookings found"));
    }
    Ok(Json(bookings).into_response())
}

/// GET /bookings/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let booking = store::bookings::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Booking not found"))?;
    Ok(Json(booking).into_response())
}

/// POST /bookings (auth) and POST /bookings/:id (auth+admin) - the booking is
/// always created for the authenticated user; the admin route reuses this
/// handler as-is.
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<BookingPayload>,
) -> Result<Response, ApiError> {
    let booking = store::bookings::create(
        &state.pool,
        user.id,
        payload.movie_id,
        payload.show_date,
        payload.seats,
    )
    .await?;
    Ok(Json(json!({ "message": "Booking created", "booking": booking })).into_response())
}

/// PUT /bookings/updateMyBooking/:id (auth) - owner-scoped: a booking that
/// exists but belongs to someone else reads as not found.
pub async fn update_mine(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<BookingPayload>,
) -> Result<Response, ApiError> {
    let booking = require_row(
        store::bookings::update_for_user(
            &state.pool,
            id,
            user.id,
            payload.movie_id,
            payload.show_date,
            payload.seats,
        )
        .await?,
        "Booking not found",
    )?;
    Ok(Json(json!({ "message": "Booking updated", "booking": booking })).into_response())
}

/// PUT /bookings/:id (auth+admin)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BookingPayload>,
) -> Result<Response, ApiError> {
    let booking = require_row(
        store::bookings::update(
            &state.pool,
            id,
            payload.movie_id,
            payload.show_date,
            payload.seats,
        )
        .await?,
        "Booking not found",
    )?;
    Ok(Json(json!({ "message": "Booking updated", "booking": booking })).into_response())
}

/// DELETE /bookings/deleteBookings (auth) - clears the current user's bookings
pub async fn delete_mine(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, ApiError> {
    require_rows(
        store::bookings::delete_by_user(&state.pool, user.id).await?,
        "No bookings found",
    )?;
    Ok("Bookings deleted".into_response())
}

/// DELETE /bookings/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    require_rows(
        store::bookings::delete(&state.pool, id).await?,
        "Booking not found",
    )?;
    Ok("Booking deleted".into_response())
}
