pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::letters::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form flow
        .route("/", get(handlers::handle_index).post(handlers::handle_upload))
        .route("/result", get(handlers::handle_result))
        .route("/download/:filename", get(handlers::handle_download))
        // JSON API
        .route("/api/v1/cover-letters", post(handlers::handle_create_letter))
        .route("/api/v1/cv/extract", post(handlers::handle_extract_preview))
        .with_state(state)
}
