//! Project listing handler

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use tracing::info;

use crate::{error::Result, AppState};

pub async fn handle_get_projects(State(state): State<AppState>) -> Result<impl IntoResponse> {
    info!("GET /api/projects");

    let projects = state.projects.list_all().await?;

    Ok(Json(json!({
        "success": true,
        "count": projects.len(),
        "data": projects,
    })))
}
