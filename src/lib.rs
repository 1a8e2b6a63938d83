pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod store;

use axum::{
    extract::State,
    http::StatusCode,
    middleware::{from_fn, from_fn_with_state},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Assemble the full application router. Lives in the library crate so
/// integration tests can drive it in-process.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Resources
        .merge(actor_routes())
        .merge(movie_routes(&state))
        .merge(booking_routes(&state))
        .merge(user_routes(&state))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn actor_routes() -> Router<AppState> {
    use handlers::actors;

    Router::new()
        .route("/actors", get(actors::list).post(actors::create))
        .route(
            "/actors/:id",
            get(actors::get).put(actors::update).delete(actors::delete),
        )
        .route("/actors/:id/movies", get(actors::movies_lazy))
        .route("/actors/:id/movies-eager", get(actors::movies_eager))
}

fn movie_routes(state: &AppState) -> Router<AppState> {
    use handlers::movies;

    let auth = from_fn_with_state(state.clone(), middleware::require_auth);
    let admin = from_fn(middleware::require_admin);

    Router::new()
        .route("/movies", get(movies::list))
        .route("/movies/:id", get(movies::get))
        .merge(
            Router::new()
                .route("/movies", post(movies::create))
                .route(
                    "/movies/:id",
                    axum::routing::put(movies::update).delete(movies::delete),
                )
                .route_layer(admin)
                .route_layer(auth),
        )
}

fn booking_routes(state: &AppState) -> Router<AppState> {
    use handlers::bookings;

    let auth = from_fn_with_state(state.clone(), middleware::require_auth);
    let admin = from_fn(middleware::require_admin);

    Router::new()
        .route("/bookings", get(bookings::list))
        .route(
            "/bookings/:id",
            get(bookings::get).delete(bookings::delete),
        )
        .merge(
            Router::new()
                .route("/bookings", post(bookings::create))
                .route("/bookings/getMyBookings", get(bookings::list_mine))
                .route(
                    "/bookings/updateMyBooking/:id",
                    axum::routing::put(bookings::update_mine),
                )
                .route(
                    "/bookings/deleteBookings",
                    axum::routing::delete(bookings::delete_mine),
                )
                .route_layer(auth.clone()),
        )
        .merge(
            Router::new()
                .route(
                    "/bookings/:id",
                    post(bookings::create).put(bookings::update),
                )
                .route_layer(admin)
                .route_layer(auth),
        )
}

fn user_routes(state: &AppState) -> Router<AppState> {
    use handlers::users;

    let auth = from_fn_with_state(state.clone(), middleware::require_auth);
    let admin = from_fn(middleware::require_admin);

    Router::new()
        .route("/users/signup", post(users::signup))
        .route("/users/login", post(users::login))
        .merge(
            Router::new()
                .route("/users", get(users::list))
                .route(
                    "/users/:id",
                    get(users::get).put(users::update).delete(users::delete),
                )
                .route_layer(admin)
                .route_layer(auth),
        )
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Cinebook API",
        "version": version,
        "description": "Movie booking REST API built with Rust (Axum)",
        "endpoints": {
            "actors": "/actors[/:id], /actors/:id/movies[-eager] (public)",
            "movies": "/movies[/:id] (public reads, admin writes)",
            "bookings": "/bookings[/:id] (mixed, see routes)",
            "users": "/users/signup, /users/login (public), /users[/:id] (admin)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match database::manager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
