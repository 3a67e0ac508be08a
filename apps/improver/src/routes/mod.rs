pub mod health;
pub mod page;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::improvement::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = match state.config.max_upload_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/", get(page::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/extract", post(handlers::handle_extract))
        .route("/api/v1/improve", post(handlers::handle_improve))
        .route(
            "/api/v1/improve/upload",
            post(handlers::handle_improve_upload),
        )
        .layer(body_limit)
        .with_state(state)
}
