//! Request logging middleware

use axum::{body::Body, http::Request, middleware::Next, response::Response};

pub async fn log_request(
    req: Request<Body>,
    next: Next,
) -> Result<Response, std::convert::Infallible> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %uri.path(),
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            "request failed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            path = %uri.path(),
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            "client error response"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %uri.path(),
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            "request processed"
        );
    }

    Ok(response)
}
