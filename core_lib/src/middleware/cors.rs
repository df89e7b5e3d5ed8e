//! CORS (Cross-Origin Resource Sharing) middleware configuration

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsConfig;

/// Restrict to the configured client origin; fall back to a permissive
/// policy when none is set (local development).
pub fn cors_layer_from_config(config: &CorsConfig) -> CorsLayer {
    let origin = config
        .allowed_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok());

    match origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([
                HeaderName::from_static("content-type"),
                HeaderName::from_static("accept"),
            ])
            .max_age(std::time::Duration::from_secs(3600)),
        None => cors_layer_permissive(),
    }
}

pub fn cors_layer_permissive() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600))
}
