//! Request logging middleware

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, warn};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs one line when a request arrives and one when it completes.
///
/// 4xx and 5xx completions are logged at `warn`.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    debug!(
        request_id = %request_id,
        user_agent = %user_agent,
        "{method} {path} started"
    );

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();

    let outcome = if status.is_server_error() {
        "server error"
    } else if status.is_client_error() {
        "client error"
    } else {
        "success"
    };

    if status.as_u16() < 400 {
        info!(
            request_id = %request_id,
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            "{method} {path} completed ({outcome})"
        );
    } else {
        warn!(
            request_id = %request_id,
            status = status.as_u16(),
            latency_ms = latency.as_millis() as u64,
            "{method} {path} completed ({outcome})"
        );
    }

    response
}
