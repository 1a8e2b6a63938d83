// HTTP API Error Types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::store::StoreError;

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// The auth variants all map to 401 but carry distinct bodies so a client can
/// tell which stage of the pipeline rejected the request. Error bodies are
/// plain text; entity payloads are the only JSON this API returns.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    MissingToken,
    InvalidToken,
    IdentityNotFound,
    InsufficientRole,
    InvalidCredentials,

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error (sanitized; the real failure is logged)
    Internal,
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingToken
            | ApiError::InvalidToken
            | ApiError::IdentityNotFound
            | ApiError::InsufficientRole
            | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::MissingToken => "Token not found",
            ApiError::InvalidToken => "Token not valid",
            ApiError::IdentityNotFound => "User not found",
            ApiError::InsufficientRole => "User not authorized",
            ApiError::InvalidCredentials => "Invalid credentials",
            ApiError::NotFound(msg) => msg,
            ApiError::Internal => "Internal server error",
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

// Store failures never reach the client verbatim: log the underlying error,
// respond with a generic 500 body.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!("store error: {}", err);
        ApiError::Internal
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.message().to_owned()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_share_status_but_not_body() {
        let stages = [
            ApiError::MissingToken,
            ApiError::InvalidToken,
            ApiError::IdentityNotFound,
            ApiError::InsufficientRole,
        ];

        let mut bodies = std::collections::HashSet::new();
        for err in stages {
            assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
            assert!(bodies.insert(err.message().to_owned()), "duplicate body");
        }
    }

    #[test]
    fn not_found_carries_resource_message() {
        let err = ApiError::not_found("Actor not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Actor not found");
    }

    #[test]
    fn internal_error_body_is_generic() {
        assert_eq!(ApiError::Internal.message(), "Internal server error");
    }
}
