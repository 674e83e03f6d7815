//! Mapping of boundary and service failures onto HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use super::dto::ValidationErrors;
use crate::task::services::TaskServiceError;

/// Failures surfaced by the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more payload fields failed validation.
    #[error("Validation failed")]
    Validation(ValidationErrors),

    /// The request body or path could not be parsed.
    #[error("{0}")]
    MalformedRequest(String),

    /// The task service reported a failure.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Numeric HTTP status.
    pub status: u16,
    /// Canonical reason phrase for the status.
    pub error: &'static str,
    /// Human-readable description.
    pub message: String,
    /// Time the error was produced.
    pub timestamp: DateTime<Utc>,
    /// Per-field messages for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<ValidationErrors>,
}

impl ApiError {
    /// Returns the HTTP status for this failure.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::Service(TaskServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(TaskServiceError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, validation_errors) = match self {
            Self::Validation(errors) => ("Validation failed".to_owned(), Some(errors)),
            Self::MalformedRequest(detail) => (detail, None),
            Self::Service(err @ TaskServiceError::NotFound(_)) => (err.to_string(), None),
            Self::Service(err @ TaskServiceError::Repository(_)) => {
                error!(error = %err, "task store failure");
                ("An unexpected error occurred".to_owned(), None)
            }
        };

        let body = ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error"),
            message,
            timestamp: Utc::now(),
            validation_errors,
        };
        (status, Json(body)).into_response()
    }
}
