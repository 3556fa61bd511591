use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    InvalidField(String),
    InvalidValue { field: String, message: String },
    IndexOutOfRange { index: i64, len: usize },
    ProfileNotFound(String),
    UpstreamUnavailable(String),
    PersistenceFailure(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors
                    .iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::InvalidField(field) => write!(f, "Invalid field name: {}", field),
            AppError::InvalidValue { field, message } => {
                write!(f, "Invalid value for {}: {}", field, message)
            }
            AppError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for list of length {}", index, len)
            }
            AppError::ProfileNotFound(id) => write!(f, "Profile not found: {}", id),
            AppError::UpstreamUnavailable(msg) => write!(f, "Upstream unavailable: {}", msg),
            AppError::PersistenceFailure(msg) => write!(f, "Persistence failure: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            AppError::InvalidField(_) => {
                serde_json::json!({"error": "Invalid field name"})
            }
            // Upstream and store failures are logged with their detail but
            // never leak it to the caller.
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!("upstream call failed: {}", msg);
                serde_json::json!({"error": "External service unavailable"})
            }
            AppError::PersistenceFailure(msg) => {
                tracing::error!("document store failure: {}", msg);
                serde_json::json!({"error": "Internal server error"})
            }
            _ => serde_json::json!({"error": self.to_string()}),
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidField(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidValue { .. } => StatusCode::BAD_REQUEST,
            AppError::IndexOutOfRange { .. } => StatusCode::BAD_REQUEST,
            AppError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PersistenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        AppError::ValidationError(field_errors)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::PersistenceFailure(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::PersistenceFailure(format!("Document (de)serialization error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamUnavailable(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::PersistenceFailure(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
