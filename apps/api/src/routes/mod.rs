pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::extraction::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/profiles/extract",
            post(handlers::handle_extract_text),
        )
        .route(
            "/api/v1/profiles/extract/pdf",
            post(handlers::handle_extract_pdf),
        )
        .fallback(not_found)
        .layer(body_limit)
        .with_state(state)
}
