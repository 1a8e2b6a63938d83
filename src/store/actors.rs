use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::StoreError;
use crate::database::models::{Actor, Movie};

const ACTOR_COLUMNS: &str = "id, first_name, created_at, updated_at, deleted_at";

// Selected by both association variants, so lazy and eager responses carry
// the same movie payload. Nothing from actor_movies is ever selected.
const MOVIE_JOIN_COLUMNS: &str = "m.id, m.title, m.created_at, m.updated_at";

/// Every actor on file, soft-deleted rows included.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Actor>, StoreError> {
    let actors = sqlx::query_as::<_, Actor>(&format!(
        "SELECT {ACTOR_COLUMNS} FROM actors ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(actors)
}

/// A single live actor by id.
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Actor>, StoreError> {
    let actor = sqlx::query_as::<_, Actor>(&format!(
        "SELECT {ACTOR_COLUMNS} FROM actors WHERE id = $1 AND deleted_at IS NULL"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(actor)
}

pub async fn create(pool: &PgPool, first_name: &str) -> Result<Actor, StoreError> {
    let actor = sqlx::query_as::<_, Actor>(&format!(
        "INSERT INTO actors (first_name) VALUES ($1) RETURNING {ACTOR_COLUMNS}"
    ))
    .bind(first_name)
    .fetch_one(pool)
    .await?;
    Ok(actor)
}

/// Update a live actor; `None` when no row matched.
pub async fn update(pool: &PgPool, id: i64, first_name: &str) -> Result<Option<Actor>, StoreError> {
    let actor = sqlx::query_as::<_, Actor>(&format!(
        "UPDATE actors SET first_name = $2, updated_at = now() \
         WHERE id = $1 AND deleted_at IS NULL RETURNING {ACTOR_COLUMNS}"
    ))
    .bind(id)
    .bind(first_name)
    .fetch_optional(pool)
    .await?;
    Ok(actor)
}

/// Soft delete: stamp `deleted_at` and report how many rows matched.
pub async fn soft_delete(pool: &PgPool, id: i64) -> Result<u64, StoreError> {
    let result = sqlx::query(
        "UPDATE actors SET deleted_at = now(), updated_at = now() \
         WHERE id = $1 AND deleted_at IS NULL",
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Follow-up query for the lazy association variant: movies for an actor the
/// caller has already fetched. Selects movie columns only.
pub async fn find_movies(pool: &PgPool, actor_id: i64) -> Result<Vec<Movie>, StoreError> {
    let movies = sqlx::query_as::<_, Movie>(&format!(
        "SELECT {MOVIE_JOIN_COLUMNS} \
         FROM movies m \
         JOIN actor_movies am ON am.movie_id = m.id \
         WHERE am.actor_id = $1 \
         ORDER BY m.id"
    ))
    .bind(actor_id)
    .fetch_all(pool)
    .await?;
    Ok(movies)
}

/// Eager association variant: one joined query. `None` means the actor does
/// not exist; `Some(vec![])` means it exists with no movies. Join-table
/// columns are never selected.
pub async fn find_movies_eager(
    pool: &PgPool,
    actor_id: i64,
) -> Result<Option<Vec<Movie>>, StoreError> {
    type JoinedRow = (
        i64,
        Option<i64>,
        Option<String>,
        Option<DateTime<Utc>>,
        Option<DateTime<Utc>>,
    );

    let rows: Vec<JoinedRow> = sqlx::query_as(&format!(
        "SELECT a.id, {MOVIE_JOIN_COLUMNS} \
         FROM actors a \
         LEFT JOIN actor_movies am ON am.actor_id = a.id \
         LEFT JOIN movies m ON m.id = am.movie_id \
         WHERE a.id = $1 AND a.deleted_at IS NULL \
         ORDER BY m.id"
    ))
    .bind(actor_id)
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        return Ok(None);
    }

    let movies = rows
        .into_iter()
        .filter_map(|(_, id, title, created_at, updated_at)| {
            Some(Movie {
                id: id?,
                title: title?,
                created_at: created_at?,
                updated_at: updated_at?,
            })
        })
        .collect();

    Ok(Some(movies))
}
