//! Liveness and datastore health handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

/// Plain liveness probe; answers regardless of datastore state.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Health including datastore connectivity: 503 when the database is
/// unreachable, mirroring a readyState of 1 (connected) or 0 (disconnected).
pub async fn handle_api_health(State(state): State<AppState>) -> impl IntoResponse {
    let connected = state.db.health_check().await.is_ok();

    let (db_status, ready_state) = if connected {
        ("connected", 1)
    } else {
        ("disconnected", 0)
    };

    let uptime_seconds = (chrono::Utc::now() - state.started_at).num_seconds();

    let health = json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": {
            "status": db_status,
            "readyState": ready_state,
        },
        "uptime": uptime_seconds,
    });

    let status_code = if connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(health))
}
