//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

use userhub_core::error::ErrorReport;

/// Logs request method, path, status, and duration.
///
/// Error responses additionally log the error kind, internal message and
/// cause chain recorded by `AppError`, which never reach the client.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match response.extensions().get::<ErrorReport>() {
        Some(report) if response.status().is_server_error() => error!(
            method = %method,
            path = %path,
            status,
            duration_ms,
            kind = %report.kind,
            error = %report.message,
            cause = report.cause.as_deref().unwrap_or("-"),
            "HTTP request failed"
        ),
        Some(report) => warn!(
            method = %method,
            path = %path,
            status,
            duration_ms,
            kind = %report.kind,
            error = %report.message,
            cause = report.cause.as_deref().unwrap_or("-"),
            "HTTP request rejected"
        ),
        None => info!(
            method = %method,
            path = %path,
            status,
            duration_ms,
            "HTTP request"
        ),
    }

    response
}
