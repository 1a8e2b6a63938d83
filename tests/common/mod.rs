use axum::Router;
use sqlx::postgres::PgPoolOptions;

use cinebook_api::config::AppConfig;
use cinebook_api::state::AppState;

pub const SECRET: &str = "integration-test-secret";

/// App wired to a pool pointing at a port nothing listens on. Any store
/// access fails immediately, so a non-500 response proves the pipeline
/// rejected the request before touching the store.
pub fn app_without_store() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://127.0.0.1:1/unreachable")
        .expect("lazy pool");

    let mut config = AppConfig::development();
    config.security.jwt_secret = SECRET.to_string();

    cinebook_api::app(AppState::new(pool, config))
}
