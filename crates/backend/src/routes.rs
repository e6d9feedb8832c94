use std::path::PathBuf;

use axum::http::{header, Method};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers::gateway::{self, AppState};

/// All gateway routes; the console itself is served from `static_dir`
pub fn configure_routes(state: AppState, static_dir: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/:endpoint", post(gateway::forward))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}
