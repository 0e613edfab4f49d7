pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::engine::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/compare", post(handlers::handle_compare))
        .fallback(not_found)
        .with_state(state)
}
