//! Rate limiting middleware for the contact write path

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use parking_lot::Mutex;
use serde_json::json;

use crate::config::RateLimitConfig;

/// Sliding-window per-IP limiter. The whole check-and-increment runs under
/// one lock so a concurrent burst from a single client cannot slip past the
/// ceiling.
#[derive(Clone)]
pub struct RateLimiter {
    requests: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            requests: Arc::new(Mutex::new(HashMap::new())),
            max_requests: config.max_requests,
            window: Duration::from_secs(config.window_seconds),
        }
    }

    pub fn check(&self, ip: IpAddr) -> Result<(), RateLimitError> {
        let now = Instant::now();
        let mut requests = self.requests.lock();

        let entries = requests.entry(ip).or_insert_with(Vec::new);

        entries.retain(|&instant| now.duration_since(instant) < self.window);

        if entries.len() >= self.max_requests {
            let oldest = entries.first().copied().unwrap_or(now);
            let reset_in = self.window.saturating_sub(now.duration_since(oldest));

            return Err(RateLimitError {
                retry_after_seconds: reset_in.as_secs(),
                limit: self.max_requests,
            });
        }

        entries.push(now);

        Ok(())
    }
}

#[derive(Debug)]
pub struct RateLimitError {
    pub retry_after_seconds: u64,
    pub limit: usize,
}

impl IntoResponse for RateLimitError {
    fn into_response(self) -> Response {
        // Fixed rejection payload; this is not treated as a server fault.
        let body = Json(json!({
            "success": false,
            "error": "Too many contact requests from this IP, please try again later.",
        }));

        let mut response = (StatusCode::TOO_MANY_REQUESTS, body).into_response();

        if let Ok(limit) = self.limit.to_string().parse() {
            response.headers_mut().insert("X-RateLimit-Limit", limit);
        }
        if let Ok(retry_after) = self.retry_after_seconds.to_string().parse() {
            response.headers_mut().insert("Retry-After", retry_after);
        }

        response
    }
}

pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, RateLimitError> {
    limiter.check(addr.ip())?;

    Ok(next.run(request).await)
}
