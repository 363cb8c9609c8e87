//! Application error type and its HTTP representation.
//!
//! Every error body has the shape `{"error": "<message>"}`. Validation and
//! not-found outcomes are reported with their own message; conflicts and
//! internal failures are logged and rendered as an opaque 500.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

use crate::utils::db_error::unique_violation_key;

/// Message returned for any unexpected server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Client input rejected before touching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Submitted URL is missing, malformed, or its host does not resolve.
    #[error("invalid url")]
    InvalidUrl,
    /// Short URL path parameter is not an integer.
    #[error("wrong format")]
    WrongFormat,
}

impl ValidationError {
    /// Invalid submissions are answered with 200.
    fn status(self) -> StatusCode {
        match self {
            ValidationError::InvalidUrl => StatusCode::OK,
            ValidationError::WrongFormat => StatusCode::BAD_REQUEST,
        }
    }
}

/// Column whose uniqueness constraint rejected an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueKey {
    OriginalUrl,
    ShortUrl,
}

impl fmt::Display for UniqueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueKey::OriginalUrl => f.write_str("original_url"),
            UniqueKey::ShortUrl => f.write_str("short_url"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No short URL found for the given input")]
    NotFound,

    #[error("unique constraint violated on {key}")]
    Conflict { key: UniqueKey },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true if this is an insert conflict on `key`.
    pub fn is_conflict_on(&self, key: UniqueKey) -> bool {
        matches!(self, AppError::Conflict { key: k } if *k == key)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(err) => (err.status(), err.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, AppError::NotFound.to_string()),
            AppError::Conflict { key } => {
                tracing::error!(%key, "Unresolved unique constraint conflict");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Internal { message, details } => {
                tracing::error!(%details, "{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(key) = unique_violation_key(&e) {
            return AppError::Conflict { key };
        }

        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}
