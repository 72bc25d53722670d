//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every failure leaves as JSON; the body shapes are part of the public
//! contract and differ per route (`{"error": ...}` vs `{"message": ...}`).

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use movies_core::{FieldError, ValidationErrors};

/// Message for a movie id that is not in the collection.
pub const MOVIE_NOT_FOUND: &str = "Movie not found";

/// `{"error": "<reason>"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"error": [FieldError, ...]}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorBody {
    pub error: Vec<FieldError>,
}

/// `{"message": "<text>"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// JSON key a not-found message is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKey {
    Error,
    Message,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Payload failed the movie schema (400).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Resource not found (404).
    #[error("not found: {message}")]
    NotFound { message: String, key: BodyKey },

    /// Body or query could not be parsed (400). Never reaches the validator.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// Body exceeded the configured size limit (413).
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// Request carried an `Origin` outside the allow-list (403).
    #[error("origin not allowed")]
    OriginRejected,
}

impl AppError {
    /// Construct a not-found error reported under `key`.
    pub fn not_found(key: BodyKey, message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            key,
        }
    }

    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::MalformedRequest(_) => (StatusCode::BAD_REQUEST, "MALFORMED_REQUEST"),
            Self::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
            Self::OriginRejected => (StatusCode::FORBIDDEN, "ORIGIN_REJECTED"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if let Self::MalformedRequest(_) = &self {
            tracing::debug!(error = %self, code, "malformed request");
        }

        match self {
            Self::Validation(errors) => (
                status,
                Json(ValidationErrorBody {
                    error: errors.into_inner(),
                }),
            )
                .into_response(),
            Self::NotFound {
                message,
                key: BodyKey::Error,
            } => (status, Json(ErrorBody { error: message })).into_response(),
            Self::NotFound {
                message,
                key: BodyKey::Message,
            } => (status, Json(MessageBody { message })).into_response(),
            Self::MalformedRequest(reason) | Self::PayloadTooLarge(reason) => {
                (status, Json(ErrorBody { error: reason })).into_response()
            }
            Self::OriginRejected => (
                status,
                Json(ErrorBody {
                    error: "Not allowed by CORS".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::MalformedRequest(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use movies_core::FieldErrorCode;

    async fn response_parts(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn status_codes() {
        let cases = [
            (
                AppError::Validation(ValidationErrors(vec![])),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::not_found(BodyKey::Error, MOVIE_NOT_FOUND),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::MalformedRequest("bad json".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::PayloadTooLarge("length limit exceeded".into()),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (AppError::OriginRejected, StatusCode::FORBIDDEN),
        ];
        for (err, expected) in cases {
            assert_eq!(err.status_and_code().0, expected, "{err}");
        }
    }

    #[tokio::test]
    async fn validation_body_is_field_error_list() {
        let errors = ValidationErrors(vec![FieldError::new(
            "year",
            FieldErrorCode::TooSmall,
            "Year must be between 1900 and 2024",
        )]);
        let (status, body) = response_parts(AppError::Validation(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"][0]["path"], "year");
        assert_eq!(body["error"][0]["code"], "too_small");
    }

    #[tokio::test]
    async fn not_found_uses_requested_key() {
        let (status, body) =
            response_parts(AppError::not_found(BodyKey::Error, MOVIE_NOT_FOUND)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "Movie not found" }));

        let (status, body) =
            response_parts(AppError::not_found(BodyKey::Message, MOVIE_NOT_FOUND)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "message": "Movie not found" }));
    }

    #[tokio::test]
    async fn origin_rejected_body() {
        let (status, body) = response_parts(AppError::OriginRejected).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Not allowed by CORS");
    }
}
