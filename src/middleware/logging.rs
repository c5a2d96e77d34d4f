//! Logging middleware

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Request logging middleware.
///
/// Client errors other than plain 404s are logged at warn so bad input
/// shows up without drowning the log in probe noise.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let noteworthy = status.is_server_error() || (status.is_client_error() && status.as_u16() != 404);

    if noteworthy {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %format!("{duration_ms:.2}"),
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %format!("{duration_ms:.2}"),
            "Request completed"
        );
    }

    response
}
