//! Main entry point for the portfolio backend server

use anyhow::Result;
use core_lib::{create_app, get_database_pool, run_migrations, run_server, AppConfig, AppState, NotificationSender};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    info!("Configuration loaded successfully");
    info!("Server will bind to: {}", config.bind_address());
    info!("Database URL: {}", config.database.url);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let pool = get_database_pool(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create database pool: {}", e))?;

    run_migrations(pool.clone())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {}", e))?;

    let notifier = NotificationSender::from_config(&config.email);
    if notifier.is_configured() {
        info!("Email notifications enabled");
    } else {
        info!("Email notifications disabled (no provider configured)");
    }

    let state = AppState::new(pool, notifier, &config);
    info!("App: {} v{}", state.app_name, state.version);

    let app = create_app(state, &config);

    run_server(app, addr).await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };

        format!(
            "{}={},core_lib={},tower_http=debug,axum=debug",
            env!("CARGO_CRATE_NAME").replace('-', "_"),
            default_level,
            default_level
        )
        .into()
    });

    let fmt_layer = fmt::layer().with_target(true);

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .init();
    }
}
