//! REST API error types
//!
//! Every error renders as `{ "mensaje", "code", "field"? }` with the HTTP
//! status the frontend expects.

use crate::messages;

use cm_services::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Human-readable message shown to the user
    pub mensaje: String,
    /// Machine-readable error code (e.g., "SLOT_CONFLICT", "VALIDATION_ERROR")
    pub code: String,
    /// Offending request field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or blank required field (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Timestamp not in `YYYY-MM-DD HH:MM:SS` form (400)
    #[error("Malformed timestamp: {message} {location}")]
    MalformedTimestamp {
        message: String,
        location: ErrorLocation,
    },

    /// Body is not JSON of the expected shape (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Login failed (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Referenced patient or doctor does not exist (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Unique resource already taken (409)
    #[error("Conflict ({code}): {message} {location}")]
    Conflict {
        message: String,
        code: &'static str,
        location: ErrorLocation,
    },

    /// Internal server error (500). `message` is logged, never sent.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Replace the client message of a validation error; other variants
    /// pass through unchanged
    pub fn with_validation_message(self, message: &str) -> Self {
        match self {
            ApiError::Validation {
                field, location, ..
            } => ApiError::Validation {
                message: message.to_string(),
                field,
                location,
            },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. }
            | ApiError::MalformedTimestamp { .. }
            | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                mensaje: message,
                code: "VALIDATION_ERROR".into(),
                field,
            },
            ApiError::MalformedTimestamp { message, .. } => ApiErrorBody {
                mensaje: message,
                code: "MALFORMED_TIMESTAMP".into(),
                field: Some("fecha_hora".into()),
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                mensaje: message,
                code: "BAD_REQUEST".into(),
                field: None,
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                mensaje: message,
                code: "INVALID_CREDENTIALS".into(),
                field: None,
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                mensaje: message,
                code: "NOT_FOUND".into(),
                field: None,
            },
            ApiError::Conflict { message, code, .. } => ApiErrorBody {
                mensaje: message,
                code: code.into(),
                field: None,
            },
            // Don't expose internal details to clients
            ApiError::Internal { .. } => ApiErrorBody {
                mensaje: messages::INTERNAL_ERROR.into(),
                code: "INTERNAL_ERROR".into(),
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert service errors to API errors
impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let code = e.error_code();

        match e {
            ServiceError::Validation { field, message, .. } => {
                log::debug!("Validation failed on {}: {}", field, message);
                ApiError::Validation {
                    message: messages::MISSING_REGISTRATION_DATA.to_string(),
                    field: Some(field.to_string()),
                    location,
                }
            }
            ServiceError::MalformedTimestamp { value, .. } => {
                log::debug!("Rejected timestamp '{}'", value);
                ApiError::MalformedTimestamp {
                    message: messages::INVALID_TIMESTAMP.to_string(),
                    location,
                }
            }
            ServiceError::DuplicateEmail { .. } => ApiError::Conflict {
                message: messages::EMAIL_TAKEN.to_string(),
                code,
                location,
            },
            ServiceError::SlotConflict { .. } => ApiError::Conflict {
                message: messages::SLOT_TAKEN.to_string(),
                code,
                location,
            },
            ServiceError::InvalidCredentials { .. } => ApiError::Unauthorized {
                message: messages::INVALID_CREDENTIALS.to_string(),
                location,
            },
            ServiceError::ReferenceNotFound { .. } => ApiError::NotFound {
                message: messages::UNKNOWN_PATIENT_OR_DOCTOR.to_string(),
                location,
            },
            other @ ServiceError::Internal { .. } => ApiError::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

/// Unparseable or mistyped JSON bodies are a plain 400, never 415/422
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        log::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest {
            message: messages::INVALID_JSON_BODY.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
