use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

/// One `api_request` event per request, with latency and the instrument the
/// path addresses. Client errors log at `warn`, server errors at `error`.
/// Bodies are never logged; they carry client answers.
pub async fn request_log(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let instrument = instrument_segment(&path).unwrap_or_default().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;
    match severity(status) {
        Severity::Error => tracing::error!(
            method = %method,
            path = %path,
            instrument = %instrument,
            status = status.as_u16(),
            latency_ms,
            "api_request"
        ),
        Severity::Warn => tracing::warn!(
            method = %method,
            path = %path,
            instrument = %instrument,
            status = status.as_u16(),
            latency_ms,
            "api_request"
        ),
        Severity::Info => tracing::info!(
            method = %method,
            path = %path,
            instrument = %instrument,
            status = status.as_u16(),
            latency_ms,
            "api_request"
        ),
    }

    response
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

pub fn severity(status: StatusCode) -> Severity {
    if status.is_server_error() {
        Severity::Error
    } else if status.is_client_error() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// The `{id}` segment of an `/instruments/{id}/...` path.
pub fn instrument_segment(path: &str) -> Option<&str> {
    let mut segments = path.trim_start_matches('/').split('/');
    match (segments.next(), segments.next()) {
        (Some("instruments"), Some(id)) if !id.is_empty() => Some(id),
        _ => None,
    }
}
