use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::JsonResponse;

pub const BAD_REQUEST_MSG: &str = "bad request >:(";
pub const NOT_FOUND_MSG: &str = "not found :(";
pub const INTERNAL_ERROR_MSG: &str = "internal server error :o";
pub const TIMEOUT_MSG: &str = "request timed out :(";

// SQLite extended result codes
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
const SQLITE_MISMATCH: &str = "20";

/// Every failure a request can end in. Handlers forward these untouched and
/// the `IntoResponse` impl below is the only place they become HTTP.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Syntax, type or whitelist violation caught before or by the store.
    #[error("malformed input")]
    MalformedInput,
    /// A write referenced a row that does not exist.
    #[error("referenced entity does not exist")]
    ReferentialViolation,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("request deadline exceeded")]
    Timeout,
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub msg: &'static str,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self::NotFound(NOT_FOUND_MSG)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput => StatusCode::BAD_REQUEST,
            ApiError::ReferentialViolation | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_json_response(&self) -> JsonResponse<ErrorBody> {
        let msg = match self {
            ApiError::MalformedInput => BAD_REQUEST_MSG,
            ApiError::ReferentialViolation => NOT_FOUND_MSG,
            ApiError::NotFound(message) => *message,
            ApiError::Timeout => TIMEOUT_MSG,
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                INTERNAL_ERROR_MSG
            }
        };
        (self.status_code(), Json(ErrorBody { msg }))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if !matches!(self, ApiError::Internal(_)) {
            tracing::debug!(error = %self, "request rejected");
        }
        self.to_json_response().into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(value: sqlx::Error) -> Self {
        match &value {
            sqlx::Error::Database(db) => {
                let code = db.code();
                let code = code.as_deref();
                let message = db.message();
                if code == Some(SQLITE_CONSTRAINT_NOTNULL)
                    || code == Some(SQLITE_MISMATCH)
                    || message.contains("NOT NULL constraint failed")
                {
                    ApiError::MalformedInput
                } else if code == Some(SQLITE_CONSTRAINT_FOREIGNKEY)
                    || message.contains("FOREIGN KEY constraint failed")
                {
                    ApiError::ReferentialViolation
                } else {
                    ApiError::Internal(value.to_string())
                }
            }
            sqlx::Error::RowNotFound => ApiError::not_found(),
            _ => ApiError::Internal(value.to_string()),
        }
    }
}
