//! Core library for the portfolio backend: route handlers, validation,
//! persistence, and the contact-notification pipeline.

pub mod config;
pub mod database;
pub mod email;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod validation;

pub use config::AppConfig;
pub use database::{
    get_database_pool, run_migrations, ContactRepository, DatabaseManager, ProjectRepository,
};
pub use email::{ContactNotification, NotificationChannel, NotificationSender};
pub use error::{AppError, Result};
pub use middleware::rate_limit::RateLimiter;
pub use models::{ContactMessage, Project};

use axum::{middleware as axum_middleware, routing::post, Router};
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub db: DatabaseManager,
    pub projects: ProjectRepository,
    pub contacts: ContactRepository,
    pub notifier: Arc<NotificationSender>,
    pub rate_limiter: RateLimiter,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(pool: sqlx::SqlitePool, notifier: NotificationSender, config: &AppConfig) -> Self {
        Self {
            app_name: "Portfolio Backend".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            db: DatabaseManager::new(pool.clone()),
            projects: ProjectRepository::new(pool.clone()),
            contacts: ContactRepository::new(pool),
            notifier: Arc::new(notifier),
            rate_limiter: RateLimiter::new(&config.rate_limit),
            started_at: Utc::now(),
        }
    }
}

pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    // Rate limiting covers the write path only; reads stay unthrottled.
    let mut contact_routes =
        Router::new().route("/api/contact", post(handlers::contact::handle_submit_contact));

    if config.rate_limit.enable {
        contact_routes = contact_routes.route_layer(axum_middleware::from_fn_with_state(
            state.rate_limiter.clone(),
            middleware::rate_limit::rate_limit_middleware,
        ));
    }

    Router::new()
        .merge(handlers::routes::create_routes())
        .merge(contact_routes)
        .fallback(handlers::routes::handle_not_found)
        .layer(middleware::cors::cors_layer_from_config(&config.cors))
        .layer(axum_middleware::from_fn(middleware::logging::log_request))
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let app = app.into_make_service_with_connect_info::<SocketAddr>();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
