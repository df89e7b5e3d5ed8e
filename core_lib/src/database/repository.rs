//! Schema-validated read/write boundary over the two collections.
//!
//! Field constraints are enforced here at write time; a constraint violation
//! surfaces as `AppError::Validation`, distinct from the connectivity errors
//! wrapped as `AppError::Database`.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};
use validator::Validate;

use crate::database::models::{DbContact, DbProject};
use crate::error::{AppError, Result};
use crate::models::{ContactMessage, Project};
use crate::validation::rules::{validate_absolute_url, validate_github_link, validate_tech_stack};
use crate::validation::{collect_messages, validate_contact};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 2000,
        message = "Description must be between 1 and 2000 characters"
    ))]
    pub description: String,

    #[validate(custom(
        function = "validate_tech_stack",
        message = "Tech stack must be a non-empty list"
    ))]
    pub tech_stack: Vec<String>,

    #[validate(custom(
        function = "validate_github_link",
        message = "Please provide a valid GitHub URL"
    ))]
    pub github_link: String,

    #[validate(custom(function = "validate_absolute_url", message = "Please provide a valid URL"))]
    #[serde(default)]
    pub live_link: Option<String>,

    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: NewProject) -> Result<Project> {
        input
            .validate()
            .map_err(|e| AppError::Validation(collect_messages(&e)))?;

        let now = Utc::now();
        let tech_stack_json =
            serde_json::to_string(&input.tech_stack).unwrap_or_else(|_| "[]".to_string());

        let row = sqlx::query(
            r#"
            INSERT INTO projects (title, description, tech_stack, github_link, live_link, image, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, title, description, tech_stack, github_link, live_link, image, created_at
        "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&tech_stack_json)
        .bind(&input.github_link)
        .bind(&input.live_link)
        .bind(&input.image)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(Self::row_to_project(&row, now).to_api_project())
    }

    /// The whole collection, newest first. No pagination: the domain size is
    /// tens of records.
    pub async fn list_all(&self) -> Result<Vec<Project>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, tech_stack, github_link, live_link, image, created_at
            FROM projects
            ORDER BY created_at DESC, id DESC
        "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows
            .iter()
            .map(|row| Self::row_to_project(row, Utc::now()).to_api_project())
            .collect())
    }

    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM projects")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        row.try_get("count").map_err(AppError::from)
    }

    fn row_to_project(row: &sqlx::sqlite::SqliteRow, fallback_time: chrono::DateTime<Utc>) -> DbProject {
        DbProject {
            id: row.try_get("id").unwrap_or(0),
            title: row.try_get("title").unwrap_or_default(),
            description: row.try_get("description").unwrap_or_default(),
            tech_stack: row
                .try_get("tech_stack")
                .unwrap_or_else(|_| "[]".to_string()),
            github_link: row.try_get("github_link").unwrap_or_default(),
            live_link: row.try_get("live_link").unwrap_or(None),
            image: row.try_get("image").unwrap_or(None),
            created_at: row.try_get("created_at").unwrap_or(fallback_time),
        }
    }
}

#[derive(Clone)]
pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a contact message, re-checking the shared field constraints at
    /// the storage boundary. `created_at` is server-assigned here.
    pub async fn create(&self, input: NewContact) -> Result<ContactMessage> {
        let errors = validate_contact(&input.name, &input.email, &input.message);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let now = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO contacts (name, email, message, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, message, created_at
        "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.message)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        let db_contact = DbContact {
            id: row.try_get("id").unwrap_or(0),
            name: row.try_get("name").unwrap_or_default(),
            email: row.try_get("email").unwrap_or_default(),
            message: row.try_get("message").unwrap_or_default(),
            created_at: row.try_get("created_at").unwrap_or(now),
        };

        Ok(db_contact.to_api_contact())
    }

    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM contacts")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        row.try_get("count").map_err(AppError::from)
    }
}
