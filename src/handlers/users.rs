use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use sha2::{Digest, Sha256};

use super::{require_row, require_rows};
use crate::auth::{generate_jwt, Claims};
use crate::error::ApiError;
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
pub struct CredentialsPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RolePayload {
    pub role: String,
}

/// POST /users/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<Response, ApiError> {
    if !password_meets_policy(&payload.password) {
        return Err(ApiError::bad_request(
            "Password must be at least 8 characters long and contain a letter and a number",
        ));
    }

    let user =
        store::users::create(&state.pool, &payload.email, &hash_password(&payload.password))
            .await?;
    Ok(Json(json!({ "message": "User created", "user": user })).into_response())
}

/// POST /users/login - verify credentials and issue a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<Response, ApiError> {
    let user = store::users::find_by_email(&state.pool, &payload.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if user.password_hash != hash_password(&payload.password) {
        return Err(ApiError::InvalidCredentials);
    }

    let claims = Claims::new(user.email, state.config.security.token_expiry_hours);
    let token = generate_jwt(&claims, &state.config.security.jwt_secret).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::Internal
    })?;

    Ok(Json(json!({ "message": "Login successful", "token": token })).into_response())
}

/// GET /users (auth+admin)
pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let users = store::users::find_all(&state.pool).await?;
    if users.is_empty() {
        return Err(ApiError::not_found("No users found"));
    }
    Ok(Json(users).into_response())
}

/// GET /users/:id (auth+admin)
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let user = store::users::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(user).into_response())
}

/// PUT /users/:id (auth+admin) - role assignment
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RolePayload>,
) -> Result<Response, ApiError> {
    if payload.role != "regular" && payload.role != "admin" {
        return Err(ApiError::bad_request("Role must be 'regular' or 'admin'"));
    }

    let user = require_row(
        store::users::update_role(&state.pool, id, &payload.role).await?,
        "User not found",
    )?;
    Ok(Json(json!({ "message": "User updated", "user": user })).into_response())
}

/// DELETE /users/:id (auth+admin)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    require_rows(store::users::delete(&state.pool, id).await?, "User not found")?;
    Ok("User deleted".into_response())
}

pub(crate) fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// At least 8 characters with one letter and one digit, no whitespace.
pub(crate) fn password_meets_policy(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && !password.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_policy_matches_the_rules() {
        assert!(password_meets_policy("abcdefg1"));
        assert!(password_meets_policy("p4ssw0rd!"));

        // too short
        assert!(!password_meets_policy("abc1"));
        // no digit
        assert!(!password_meets_policy("abcdefgh"));
        // no letter
        assert!(!password_meets_policy("12345678"));
        // whitespace
        assert!(!password_meets_policy("abc def12"));
    }

    #[test]
    fn password_hash_is_stable_hex() {
        let hash = hash_password("p4ssw0rd!");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_password("p4ssw0rd!"));
        assert_ne!(hash, hash_password("p4ssw0rd?"));
    }
}
