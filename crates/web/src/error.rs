use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use storage::services::mark_submission::{MarkValidationError, SubmitMarksError};
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    InvalidMarks(MarkValidationError),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::InvalidMarks(e) => write!(f, "Invalid marks: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::InvalidMarks(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        let body = match &self {
            Self::Storage(StorageError::NotFound) => json!({ "error": "Resource not found" }),
            Self::Storage(StorageError::ConstraintViolation(msg)) => json!({ "error": msg }),
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({ "error": "An internal error occurred" })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::InvalidMarks(e) => json!({ "error": e.to_string() }),
            Self::BadRequest(msg) => json!({ "error": msg }),
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<SubmitMarksError> for WebError {
    fn from(error: SubmitMarksError) -> Self {
        match error {
            SubmitMarksError::Invalid(e) => Self::InvalidMarks(e),
            SubmitMarksError::Storage(e) => Self::Storage(e),
        }
    }
}

pub type WebResult<T> = Result<T, WebError>;

/// Derived read-only views (leaderboard, completeness, comparison) fall back
/// to `fallback` when the database cannot be read. Unknown ids still yield
/// 404.
pub fn degrade_on_read_failure<T>(
    result: storage::error::Result<T>,
    view: &str,
    fallback: impl FnOnce() -> T,
) -> WebResult<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e @ (StorageError::NotFound | StorageError::ConstraintViolation(_))) => Err(e.into()),
        Err(e) => {
            tracing::warn!(view, error = %e, "Store read failed, serving empty result");
            Ok(fallback())
        }
    }
}
