//! Quiz service error types with HTTP status code mapping.
//!
//! [`QuizError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! Lookups that find nothing are not errors inside the persistence layer;
//! they only become [`QuizError::QuestionNotFound`] or
//! [`QuizError::AnswerNotFound`] at the HTTP boundary.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// Every error from the quiz and system endpoints, including unreadable
/// bodies and malformed path or query parameters, follows this shape:
/// ```json
/// {
///   "error": {
///     "code": 2003,
///     "message": "a question with this text already exists: 2+2=?"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see [`QuizError`] code ranges).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category              | HTTP Status                  |
/// |-----------|-----------------------|------------------------------|
/// | 1000–1999 | Validation            | 400 Bad Request              |
/// | 2000–2999 | Not Found / Conflict  | 404 Not Found / 409 Conflict |
/// | 3000–3999 | Server                | 500 / 503                    |
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Question with the given ID was not found.
    #[error("question not found: {0}")]
    QuestionNotFound(i64),

    /// Question has no choice flagged correct, or does not exist.
    #[error("no correct answer found for question {0}")]
    AnswerNotFound(i64),

    /// Another question already uses this text.
    #[error("a question with this text already exists: {0}")]
    DuplicateQuestion(String),

    /// The database could not be reached.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Any other database failure.
    #[error("storage error: {0}")]
    Storage(String),
}

impl QuizError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::QuestionNotFound(_) => 2001,
            Self::AnswerNotFound(_) => 2002,
            Self::DuplicateQuestion(_) => 2003,
            Self::Storage(_) => 3001,
            Self::StorageUnavailable(_) => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::QuestionNotFound(_) | Self::AnswerNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateQuestion(_) => StatusCode::CONFLICT,
            Self::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for QuizError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::StorageUnavailable(err.to_string()),
            _ => Self::Storage(err.to_string()),
        }
    }
}

impl From<JsonRejection> for QuizError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for QuizError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for QuizError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        (status, axum::Json(body)).into_response()
    }
}
