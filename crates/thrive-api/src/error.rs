use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use thrive_core::error::CoreError;
use thrive_instruments::error::ScoringError;
use thrive_instruments::responses::MissingItem;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// The submission parsed but cannot be scored.
    Unprocessable {
        message: String,
        missing: Vec<MissingItem>,
    },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<MissingItem>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, missing) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::Unprocessable { message, missing } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, missing)
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error, missing })).into_response()
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        match e {
            ScoringError::UnknownInstrument(id) => {
                ApiError::NotFound(format!("instrument not found: {id}"))
            }
            ScoringError::InvalidInstrument { .. } => ApiError::Internal(e.to_string()),
            ScoringError::IncompleteInput { ref missing, .. } => ApiError::Unprocessable {
                message: e.to_string(),
                missing: missing.clone(),
            },
            other => ApiError::Unprocessable {
                message: other.to_string(),
                missing: Vec::new(),
            },
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
