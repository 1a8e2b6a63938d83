use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Movie row. Related to actors many-to-many through `actor_movies`;
/// the join table's own columns never appear in API payloads.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
