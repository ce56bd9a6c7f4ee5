//! HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// A request failure carrying the status code and the message shown to the caller.
///
/// Renders as `{"detail": "<message>"}`.
///
/// # Examples
///
/// ```
/// use axum::http::StatusCode;
/// use wikiquiz_server::ApiError;
///
/// let err = ApiError::not_found("Quiz not found");
/// assert_eq!(err.status, StatusCode::NOT_FOUND);
/// assert_eq!(err.detail, "Quiz not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{}: {}", status, detail)]
pub struct ApiError {
    /// HTTP status returned to the caller
    pub status: StatusCode,
    /// Human-readable message placed in the `detail` field
    pub detail: String,
}

impl ApiError {
    /// Create an error with an explicit status.
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    /// 404 Not Found.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    /// 500 Internal Server Error.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

/// Result type for request handling.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
