use chrono::NaiveDate;
use sqlx::PgPool;

use super::StoreError;
use crate::database::models::Booking;

const BOOKING_COLUMNS: &str = "id, user_id, movie_id, show_date, seats, created_at, updated_at";

pub async fn find_all(pool: &PgPool) -> Result<Vec<Booking>, StoreError> {
    let bookings = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(bookings)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Booking>, StoreError> {
    let booking = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(booking)
}

/// Bookings owned by one user.
pub async fn find_by_user(pool: &PgPool, user_id: i64) -> Result<Vec<Booking>, StoreError> {
    let bookings = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE user_id = $1 ORDER BY id"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(bookings)
}

pub async fn create(
    pool: &PgPool,
    user_id: i64,
    movie_id: i64,
    show_date: NaiveDate,
    seats: i32,
) -> Result<Booking, StoreError> {
    let booking = sqlx::query_as::<_, Booking>(&format!(
        "INSERT INTO bookings (user_id, movie_id, show_date, seats) \
         VALUES ($1, $2, $3, $4) RETURNING {BOOKING_COLUMNS}"
    ))
    .bind(user_id)
    .bind(movie_id)
    .bind(show_date)
    .bind(seats)
    .fetch_one(pool)
    .await?;
    Ok(booking)
}

/// Unscoped update by id; `None` when no row matched.
pub async fn update(
    pool: &PgPool,
    id: i64,
    movie_id: i64,
    show_date: NaiveDate,
    seats: i32,
) -> Result<Option<Booking>, StoreError> {
    let booking = sqlx::query_as::<_, Booking>(&format!(
        "UPDATE bookings SET movie_id = $2, show_date = $3, seats = $4, updated_at = now() \
         WHERE id = $1 RETURNING {BOOKING_COLUMNS}"
    ))
    .bind(id)
    .bind(movie_id)
    .bind(show_date)
    .bind(seats)
    .fetch_optional(pool)
    .await?;
    Ok(booking)
}

/// Owner-scoped update: only touches the row if it belongs to `user_id`.
pub async fn update_for_user(
    pool: &PgPool,
    id: i64,
    user_id: i64,
    movie_id: i64,
    show_date: NaiveDate,
    seats: i32,
) -> Result<Option<Booking>, StoreError> {
    let booking = sqlx::query_as::<_, Booking>(&format!(
        "UPDATE bookings SET movie_id = $3, show_date = $4, seats = $5, updated_at = now() \
         WHERE id = $1 AND user_id = $2 RETURNING {BOOKING_COLUMNS}"
    ))
    .bind(id)
    .bind(user_id)
    .bind(movie_id)
    .bind(show_date)
    .bind(seats)
    .fetch_optional(pool)
    .await?;
    Ok(booking)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Delete every booking owned by one user.
pub async fn delete_by_user(pool: &PgPool, user_id: i64) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM bookings WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
