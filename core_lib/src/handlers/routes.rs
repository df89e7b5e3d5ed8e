//! Route table and fallback handler

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use crate::{handlers, AppState};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::handle_health))
        .route("/api/health", get(handlers::health::handle_api_health))
        .route("/api/metrics", get(handlers::metrics::handle_metrics))
        .route("/api/projects", get(handlers::projects::handle_get_projects))
}

pub async fn handle_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}
