use sqlx::{Row, SqlitePool};
use tracing::{error, info};

use crate::error::{AppError, Result};

pub struct MigrationManager {
    pool: SqlitePool,
}

struct Migration {
    version: i64,
    name: String,
    checksum: String,
    sql_statements: Vec<String>,
}

impl MigrationManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        info!("Starting database migrations");

        self.create_migrations_table().await?;

        let current_version = self.get_current_version().await?;
        info!("Current migration version: {}", current_version);

        let migrations = self.get_migrations();
        let mut applied_count = 0;

        for migration in migrations {
            if migration.version > current_version {
                info!("Applying migration {}: {}", migration.version, migration.name);
                self.apply_migration(&migration).await?;
                applied_count += 1;
            }
        }

        if applied_count > 0 {
            info!("Applied {} migrations successfully", applied_count);
        } else {
            info!("No new migrations to apply");
        }

        Ok(())
    }

    async fn create_migrations_table(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                checksum TEXT NOT NULL
            )
        "#,
        )
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(())
    }

    async fn get_current_version(&self) -> Result<i64> {
        let result = sqlx::query("SELECT MAX(version) as version FROM _migrations")
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)?;

        match result {
            Some(row) => Ok(row.try_get("version").unwrap_or(0)),
            None => Ok(0),
        }
    }

    async fn apply_migration(&self, migration: &Migration) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        for statement in &migration.sql_statements {
            sqlx::query(statement).execute(&mut *tx).await.map_err(|e| {
                error!("Failed to execute migration statement: {}", e);
                AppError::from(e)
            })?;
        }

        sqlx::query(
            r#"
            INSERT INTO _migrations (version, name, checksum)
            VALUES (?, ?, ?)
        "#,
        )
        .bind(migration.version)
        .bind(&migration.name)
        .bind(&migration.checksum)
        .execute(&mut *tx)
        .await
        .map_err(AppError::from)?;

        tx.commit().await.map_err(AppError::from)?;
        Ok(())
    }

    fn get_migrations(&self) -> Vec<Migration> {
        vec![
            Migration {
                version: 1,
                name: "create_projects_table".to_string(),
                checksum: "projects_v1".to_string(),
                sql_statements: vec![
                    r#"
                    CREATE TABLE projects (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        title TEXT NOT NULL,
                        description TEXT NOT NULL,
                        tech_stack TEXT NOT NULL DEFAULT '[]',
                        github_link TEXT NOT NULL,
                        live_link TEXT,
                        image TEXT,
                        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
                    )
                    "#
                    .to_string(),
                    r#"
                    CREATE INDEX idx_projects_created_at ON projects(created_at)
                    "#
                    .to_string(),
                ],
            },
            Migration {
                version: 2,
                name: "create_contacts_table".to_string(),
                checksum: "contacts_v1".to_string(),
                sql_statements: vec![
                    r#"
                    CREATE TABLE contacts (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        name TEXT NOT NULL,
                        email TEXT NOT NULL,
                        message TEXT NOT NULL,
                        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
                    )
                    "#
                    .to_string(),
                    r#"
                    CREATE INDEX idx_contacts_created_at ON contacts(created_at)
                    "#
                    .to_string(),
                ],
            },
        ]
    }
}

pub async fn run_migrations(pool: SqlitePool) -> Result<()> {
    MigrationManager::new(pool).run_migrations().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::database::connection::get_database_pool;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_migrations_create_both_tables() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite:{}", temp_file.path().display()),
            ..DatabaseConfig::default()
        };
        let pool = get_database_pool(&config).await.unwrap();

        run_migrations(pool.clone()).await.unwrap();

        let tables: Vec<String> = sqlx::query("SELECT name FROM sqlite_master WHERE type='table'")
            .fetch_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|row| row.get::<String, _>("name"))
            .collect();

        assert!(tables.contains(&"projects".to_string()));
        assert!(tables.contains(&"contacts".to_string()));
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite:{}", temp_file.path().display()),
            ..DatabaseConfig::default()
        };
        let pool = get_database_pool(&config).await.unwrap();

        run_migrations(pool.clone()).await.unwrap();
        run_migrations(pool.clone()).await.unwrap();

        let version: i64 = sqlx::query("SELECT MAX(version) as version FROM _migrations")
            .fetch_one(&pool)
            .await
            .unwrap()
            .get("version");
        assert_eq!(version, 2);
    }
}
