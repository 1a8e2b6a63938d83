use sqlx::PgPool;

use super::StoreError;
use crate::database::models::Movie;

const MOVIE_COLUMNS: &str = "id, title, created_at, updated_at";

pub async fn find_all(pool: &PgPool) -> Result<Vec<Movie>, StoreError> {
    let movies = sqlx::query_as::<_, Movie>(&format!(
        "SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(movies)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Movie>, StoreError> {
    let movie = sqlx::query_as::<_, Movie>(&format!(
        "SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(movie)
}

pub async fn create(pool: &PgPool, title: &str) -> Result<Movie, StoreError> {
    let movie = sqlx::query_as::<_, Movie>(&format!(
        "INSERT INTO movies (title) VALUES ($1) RETURNING {MOVIE_COLUMNS}"
    ))
    .bind(title)
    .fetch_one(pool)
    .await?;
    Ok(movie)
}

pub async fn update(pool: &PgPool, id: i64, title: &str) -> Result<Option<Movie>, StoreError> {
    let movie = sqlx::query_as::<_, Movie>(&format!(
        "UPDATE movies SET title = $2, updated_at = now() WHERE id = $1 RETURNING {MOVIE_COLUMNS}"
    ))
    .bind(id)
    .bind(title)
    .fetch_optional(pool)
    .await?;
    Ok(movie)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, StoreError> {
    let result = sqlx::query("DELETE FROM movies WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
