// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Two families of failure exist. Client input problems
/// (missing, non-numeric, out of range, malformed body) map to 400;
/// store failures map to 500.
#[derive(Error, Debug)]
pub enum SchoolsError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("{0} must be a valid number")]
    InvalidNumber(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl SchoolsError {
    /// True for errors caused by client-supplied input
    pub fn is_validation(&self) -> bool {
        !matches!(self, SchoolsError::DatabaseError(_))
    }

    fn error_code(&self) -> &'static str {
        match self {
            SchoolsError::MissingField(_) => "MISSING_FIELD",
            SchoolsError::InvalidNumber(_) => "INVALID_NUMBER",
            SchoolsError::ValidationError(_) => "VALIDATION_ERROR",
            SchoolsError::InvalidBody(_) => "INVALID_BODY",
            SchoolsError::InvalidQuery(_) => "INVALID_QUERY",
            SchoolsError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Message shown to API consumers; storage details stay in the logs
    fn public_message(&self) -> String {
        match self {
            SchoolsError::DatabaseError(_) => "Database error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for SchoolsError {
    fn from(err: sqlx::Error) -> Self {
        SchoolsError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for SchoolsError {
    fn from(err: validator::ValidationErrors) -> Self {
        SchoolsError::ValidationError(err.to_string())
    }
}

/// Convert SchoolsError to HTTP response
/// DOCUMENTATION: Every failure carries `success: false` and a message
impl ResponseError for SchoolsError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "success": false,
            "error": {
                "code": self.error_code(),
                "message": self.public_message(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
