use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Actor row. `deleted_at` is the soft-delete marker: deletes stamp it
/// instead of removing the row, and single-row reads skip stamped rows.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: i64,
    pub first_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
