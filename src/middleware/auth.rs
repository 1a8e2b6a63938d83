use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::auth::Claims;
use crate::database::models::Role;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store;

/// Identity resolved from a verified token.
///
/// The private marker field means only this module can construct one, so the
/// admin gate can never be handed anything but the output of a successful
/// resolution.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
    _resolved: (),
}

/// Authentication middleware: verify the bearer credential, then resolve the
/// identity it claims.
///
/// The raw `Authorization` header value is the token; there is no `Bearer `
/// prefix on this API. Failure order is fixed: missing header, then
/// signature/expiry, then identity lookup. The store is never touched before
/// the token checks pass.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(request.headers())?;
    let claims = verify_token(&token, &state.config.security.jwt_secret)?;

    let user = store::users::find_by_email(&state.pool, &claims.email)
        .await?
        .ok_or(ApiError::IdentityNotFound)?;

    let current = CurrentUser {
        id: user.id,
        role: user.role(),
        email: user.email,
        _resolved: (),
    };
    request.extensions_mut().insert(current);

    Ok(next.run(request).await)
}

/// Authorization gate: admin role or 401. Must be layered inside
/// `require_auth`; reaching it without a resolved identity is a wiring bug
/// and reports as a 500.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(|| {
            tracing::error!("admin gate reached without a resolved identity");
            ApiError::Internal
        })?;

    if user.role != Role::Admin {
        return Err(ApiError::InsufficientRole);
    }

    Ok(next.run(request).await)
}

fn extract_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let value = headers
        .get("authorization")
        .ok_or(ApiError::MissingToken)?;

    let token = value.to_str().map_err(|_| ApiError::InvalidToken)?;
    if token.trim().is_empty() {
        return Err(ApiError::MissingToken);
    }

    Ok(token.to_string())
}

fn verify_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    if secret.is_empty() {
        tracing::error!("SECRET is not configured");
        return Err(ApiError::Internal);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|_| ApiError::InvalidToken)?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware::from_fn,
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    fn current_user(role: Role) -> CurrentUser {
        CurrentUser {
            id: 1,
            email: "user@example.com".into(),
            role,
            _resolved: (),
        }
    }

    /// Router that simulates a resolved identity before the gate runs.
    fn gated_router(role: Role) -> Router {
        let resolve = move |mut request: Request, next: Next| async move {
            request.extensions_mut().insert(current_user(role));
            next.run(request).await
        };

        Router::new()
            .route("/admin", get(|| async { "ok" }))
            .layer(from_fn(require_admin))
            .layer(from_fn(resolve))
    }

    #[tokio::test]
    async fn gate_rejects_regular_users() {
        let response = gated_router(Role::Regular)
            .oneshot(
                HttpRequest::builder()
                    .uri("/admin")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"User not authorized");
    }

    #[tokio::test]
    async fn gate_passes_admins() {
        let response = gated_router(Role::Admin)
            .oneshot(
                HttpRequest::builder()
                    .uri("/admin")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn gate_without_resolver_is_a_wiring_bug() {
        let app = Router::new()
            .route("/admin", get(|| async { "ok" }))
            .layer(from_fn(require_admin));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/admin")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_or_blank_header_is_missing_token() {
        let headers = HeaderMap::new();
        assert!(matches!(
            extract_token(&headers),
            Err(ApiError::MissingToken)
        ));

        let mut headers = HeaderMap::new();
        headers.insert("authorization", " ".parse().unwrap());
        assert!(matches!(
            extract_token(&headers),
            Err(ApiError::MissingToken)
        ));
    }

    #[test]
    fn raw_header_value_is_the_token() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "abc.def.ghi".parse().unwrap());
        assert_eq!(extract_token(&headers).unwrap(), "abc.def.ghi");

        // No Bearer prefix handling on this API: the prefix would just be
        // part of the (invalid) token.
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(extract_token(&headers).unwrap(), "Bearer abc.def.ghi");
    }

    #[test]
    fn verify_token_maps_failures() {
        assert!(matches!(
            verify_token("garbage", "secret"),
            Err(ApiError::InvalidToken)
        ));
        assert!(matches!(
            verify_token("garbage", ""),
            Err(ApiError::Internal)
        ));

        let claims = Claims::new("user@example.com".into(), 1);
        let token = crate::auth::generate_jwt(&claims, "secret").unwrap();
        assert_eq!(
            verify_token(&token, "secret").unwrap().email,
            "user@example.com"
        );
        assert!(matches!(
            verify_token(&token, "other"),
            Err(ApiError::InvalidToken)
        ));
    }
}
