use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Input rejected before anything reaches the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid attendance status: {0}")]
    InvalidStatus(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("employee {0} not found")]
    EmployeeNotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::EmployeeNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(ValidationError::MissingField(_)) => {
                HttpResponse::BadRequest().json(json!({
                    "Enter all details": "Please fill in all required fields."
                }))
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Store operation failed");
                HttpResponse::InternalServerError().json(json!({
                    "message": "Something went wrong, Contact with system admin"
                }))
            }
            other => HttpResponse::build(self.status_code()).json(json!({
                "message": other.to_string()
            })),
        }
    }
}
