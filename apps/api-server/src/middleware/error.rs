//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use tracker_core::{DomainError, ValidationErrors};
use tracker_shared::{ErrorResponse, FieldErrorBody};

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request, or a record the caller may not see.
    BadRequest(String),
    Unauthorized(String),
    Validation(Vec<FieldErrorBody>),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized(detail) => ErrorResponse::unauthorized(detail),
            AppError::Validation(errors) => {
                ErrorResponse::unprocessable("Invalid inputs", errors.clone())
            }
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

fn field_errors(errors: ValidationErrors) -> Vec<FieldErrorBody> {
    errors
        .into_iter()
        .map(|e| FieldErrorBody {
            field: e.field,
            message: e.message,
        })
        .collect()
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => AppError::Validation(field_errors(errors)),
            DomainError::DuplicateEmail => AppError::Validation(vec![FieldErrorBody {
                field: "email".to_string(),
                message: DomainError::DuplicateEmail.to_string(),
            }]),
            DomainError::Authentication => AppError::Unauthorized("Not authenticated".to_string()),
            DomainError::NotAuthorized(msg) => AppError::BadRequest(msg),
            DomainError::Crypto(msg) => AppError::Internal(format!("crypto: {msg}")),
            DomainError::Internal(msg) => AppError::Internal(msg),
            DomainError::Repository(e) => AppError::Internal(format!("database: {e}")),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
