use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use tracing::{error, info};

use crate::config::DatabaseConfig;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<()> {
        let row = sqlx::query("SELECT 1 as test")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Database health check failed: {}", e);
                AppError::from(e)
            })?;

        let test_value: i32 = row.try_get("test").map_err(AppError::from)?;

        if test_value == 1 {
            Ok(())
        } else {
            Err(AppError::from(sqlx::Error::RowNotFound))
        }
    }
}

pub async fn get_database_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    info!("Connecting to database: {}", config.url);

    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(AppError::from)?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .test_before_acquire(true)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to create database pool: {}", e);
            AppError::from(e)
        })?;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .map_err(AppError::from)?;

    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await
        .map_err(AppError::from)?;

    sqlx::query("PRAGMA busy_timeout = 30000")
        .execute(&pool)
        .await
        .map_err(AppError::from)?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_database_connection() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite:{}", temp_file.path().display()),
            ..DatabaseConfig::default()
        };

        let pool = get_database_pool(&config).await.unwrap();
        let db_manager = DatabaseManager::new(pool);

        db_manager.health_check().await.unwrap();
    }
}
