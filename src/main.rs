use cinebook_api::config::AppConfig;
use cinebook_api::database::manager;
use cinebook_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("Starting Cinebook API in {:?} mode", config.environment);

    let pool = manager::connect_lazy(&config.database)
        .unwrap_or_else(|e| panic!("failed to create database pool: {}", e));

    let port = config.server.port;
    let state = AppState::new(pool, config);
    let app = cinebook_api::app(state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Cinebook API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
