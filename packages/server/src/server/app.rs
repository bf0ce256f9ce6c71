//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{get_castle_handler, health_handler, list_castles_handler};

/// Shared application state.
///
/// The pool is constructed once in `main` before the server accepts traffic
/// and then read-shared by every request; handlers hold no other state.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, allowed_origins: Vec<String>) -> Router {
    let app_state = AppState { db_pool: pool };

    // CORS: restrict to the configured site host when one is set, stay
    // permissive for local development otherwise.
    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers([CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET])
            .allow_headers([CONTENT_TYPE])
    };

    Router::new()
        .route("/castles/api", get(list_castles_handler))
        .route("/castles/api/:web_name", get(get_castle_handler))
        .route("/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
