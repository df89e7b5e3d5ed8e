use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portfolio project as served by the API. Read-only from the API's
/// perspective; rows are created by the offline seed binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}
