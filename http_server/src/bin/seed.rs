//! Offline project seeding: loads project records from a JSON file (or a
//! built-in sample set) and inserts them through the validated repository.
//!
//! Usage: `seed [projects.json]`

use anyhow::Result;
use core_lib::database::repository::NewProject;
use core_lib::{get_database_pool, run_migrations, AppConfig, ProjectRepository};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    let pool = get_database_pool(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create database pool: {}", e))?;

    run_migrations(pool.clone())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {}", e))?;

    let repository = ProjectRepository::new(pool);

    let projects: Vec<NewProject> = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading projects from {}", path);
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        }
        None => {
            info!("No file given, using built-in sample projects");
            sample_projects()
        }
    };

    let mut inserted = 0;
    for project in projects {
        let title = project.title.clone();
        match repository.create(project).await {
            Ok(created) => {
                info!(id = created.id, title = %created.title, "project seeded");
                inserted += 1;
            }
            Err(e) => warn!(title = %title, error = %e, "skipping invalid project"),
        }
    }

    info!("Seeding complete: {} projects inserted", inserted);
    Ok(())
}

fn sample_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "Portfolio Website".to_string(),
            description: "Personal portfolio with a project showcase and contact form."
                .to_string(),
            tech_stack: vec![
                "Rust".to_string(),
                "axum".to_string(),
                "SQLite".to_string(),
            ],
            github_link: "https://github.com/example/portfolio".to_string(),
            live_link: Some("https://example.com".to_string()),
            image: None,
        },
        NewProject {
            title: "Task Tracker".to_string(),
            description: "A small task tracking API with tags and due dates.".to_string(),
            tech_stack: vec!["TypeScript".to_string(), "Express".to_string()],
            github_link: "https://github.com/example/task-tracker".to_string(),
            live_link: None,
            image: None,
        },
    ]
}
