pub mod actors;
pub mod bookings;
pub mod movies;
pub mod users;

use crate::error::ApiError;

/// Map an update's optional returned row: absent means the targeted id did
/// not exist, which is the resource's 404 regardless of the request body.
pub(crate) fn require_row<T>(row: Option<T>, missing: &str) -> Result<T, ApiError> {
    row.ok_or_else(|| ApiError::not_found(missing))
}

/// Map a delete's affected-row count: zero rows is the resource's 404,
/// anything else is success.
pub(crate) fn require_rows(rows: u64, missing: &str) -> Result<(), ApiError> {
    if rows == 0 {
        return Err(ApiError::not_found(missing));
    }
    Ok(())
}
