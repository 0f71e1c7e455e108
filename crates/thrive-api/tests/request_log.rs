use axum::http::StatusCode;

use thrive_api::middleware::request_log::{instrument_segment, severity, Severity};

#[test]
fn instrument_taken_from_path() {
    assert_eq!(instrument_segment("/instruments/vlq"), Some("vlq"));
    assert_eq!(instrument_segment("/instruments/rrs/score"), Some("rrs"));
    assert_eq!(instrument_segment("/instruments/mbi/status"), Some("mbi"));
}

#[test]
fn no_instrument_outside_instrument_routes() {
    assert_eq!(instrument_segment("/health"), None);
    assert_eq!(instrument_segment("/instruments"), None);
    assert_eq!(instrument_segment("/instruments/"), None);
    assert_eq!(instrument_segment("/"), None);
}

#[test]
fn severity_follows_status_class() {
    assert_eq!(severity(StatusCode::OK), Severity::Info);
    assert_eq!(severity(StatusCode::NOT_FOUND), Severity::Warn);
    assert_eq!(severity(StatusCode::UNPROCESSABLE_ENTITY), Severity::Warn);
    assert_eq!(severity(StatusCode::INTERNAL_SERVER_ERROR), Severity::Error);
}
