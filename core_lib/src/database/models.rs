//! Database row types and their API-model conversions

use chrono::{DateTime, Utc};

use crate::models::{ContactMessage, Project};

/// Raw `projects` row; `tech_stack` is stored as a JSON text column.
#[derive(Debug, Clone)]
pub struct DbProject {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub github_link: String,
    pub live_link: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DbProject {
    pub fn to_api_project(&self) -> Project {
        let tech_stack: Vec<String> = serde_json::from_str(&self.tech_stack).unwrap_or_default();

        Project {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            tech_stack,
            github_link: self.github_link.clone(),
            live_link: self.live_link.clone(),
            image: self.image.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DbContact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl DbContact {
    pub fn to_api_contact(&self) -> ContactMessage {
        ContactMessage {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_stack_json_round_trip() {
        let row = DbProject {
            id: 1,
            title: "Portfolio".to_string(),
            description: "Personal site".to_string(),
            tech_stack: r#"["Rust","axum"]"#.to_string(),
            github_link: "https://github.com/owner/portfolio".to_string(),
            live_link: None,
            image: None,
            created_at: Utc::now(),
        };

        let project = row.to_api_project();
        assert_eq!(project.tech_stack, vec!["Rust", "axum"]);
    }

    #[test]
    fn test_malformed_tech_stack_defaults_to_empty() {
        let row = DbProject {
            id: 1,
            title: "Portfolio".to_string(),
            description: "Personal site".to_string(),
            tech_stack: "not json".to_string(),
            github_link: "https://github.com/owner/portfolio".to_string(),
            live_link: None,
            image: None,
            created_at: Utc::now(),
        };

        assert!(row.to_api_project().tech_stack.is_empty());
    }
}
