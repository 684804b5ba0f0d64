//! API error envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use tracing::warn;

use crate::db::DbError;
use crate::remote::ErrorResponse;

/// Handler failure. Rendered as HTTP 400 with `{ "error": message }`,
/// the envelope every function endpoint uses for failures.
#[derive(Debug, Clone, Display, Error)]
#[display("API error: {message}")]
pub struct ApiError {
    /// Human-readable failure message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        Self::new(err.message)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Storage error: {}", err))
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self::new(format!("Malformed upload: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self.message, "Request failed");
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
