//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON `{"error": ...}`
//! body. Client messages are fixed strings; request input and internal causes
//! are never echoed back.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quizlink_core::PayloadError;
use quizlink_service::ServiceError;

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: body missing or not actionable.
    BadRequest(&'static str),
    /// 500: database not configured or unreachable.
    DatabaseUnavailable,
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::DatabaseUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Database connection failed")
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Payload(PayloadError::Empty) => Self::BadRequest("No data provided"),
            ServiceError::Payload(PayloadError::MissingFacebookId) => {
                Self::BadRequest("No Facebook ID found")
            },
            ServiceError::Payload(PayloadError::InvalidTimestamp(_)) => {
                Self::BadRequest("Invalid finished_at timestamp")
            },
            ref e if e.is_unavailable() => Self::DatabaseUnavailable,
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}
