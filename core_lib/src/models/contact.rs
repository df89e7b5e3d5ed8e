use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form submission. Created once, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
