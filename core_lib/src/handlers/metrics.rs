//! Stored-collection metrics handler

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use tracing::info;

use crate::{error::Result, AppState};

pub async fn handle_metrics(State(state): State<AppState>) -> Result<impl IntoResponse> {
    info!("GET /api/metrics");

    let (project_count, contact_count) =
        tokio::try_join!(state.projects.count(), state.contacts.count())?;

    Ok(Json(json!({
        "success": true,
        "metrics": {
            "projects": project_count,
            "contacts": contact_count,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        },
    })))
}
