//! Application error type and its HTTP mapping.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

/// Failure categories surfaced by the business layer.
///
/// - `Validation` → 400
/// - `NotFound` → 404
/// - `ExternalService` → 500, carrying the underlying cause
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    ExternalService {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn external(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::ExternalService {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::ExternalService { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, details) = match self {
            AppError::Validation { message, details } => (message, details),
            AppError::NotFound { message, details } => (message, details),
            AppError::ExternalService { message, .. } => (message, Value::Null),
        };

        (status, Json(ErrorBody { message, details })).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();

        let message = if messages.is_empty() {
            "Validation failed".to_string()
        } else {
            messages.join("; ")
        };

        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);

        AppError::bad_request(message, details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(
            "Invalid path parameter",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Probe name is required"))]
        name: String,
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("bad", Value::Null).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing", Value::Null).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::external("db down", "boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_errors_keep_field_message() {
        let errors = Probe {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let err = AppError::from(errors);

        match err {
            AppError::Validation { message, details } => {
                assert_eq!(message, "Probe name is required");
                assert!(details.get("name").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_external_service_keeps_source() {
        use std::error::Error;

        let err = AppError::external("Failed to load", "connection refused");
        assert_eq!(err.to_string(), "Failed to load");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("connection refused".to_string())
        );
    }
}
