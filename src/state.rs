use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;

/// Shared application state threaded through the router. Each pipeline stage
/// reads the secret and the pool from here instead of process-wide globals.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}
