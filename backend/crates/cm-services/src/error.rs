use cm_auth::AuthError;
use cm_core::CoreError;
use cm_db::{APPOINTMENT_SLOT_CONSTRAINT, DbError, PATIENT_EMAIL_CONSTRAINT};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Malformed timestamp '{value}': {message} {location}")]
    MalformedTimestamp {
        value: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Email already registered {location}")]
    DuplicateEmail { location: ErrorLocation },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Slot already booked for this doctor {location}")]
    SlotConflict { location: ErrorLocation },

    #[error("Referenced patient or doctor does not exist: {message} {location}")]
    ReferenceNotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    /// Stable machine-readable code, surfaced to API clients
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::MalformedTimestamp { .. } => "MALFORMED_TIMESTAMP",
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::SlotConflict { .. } => "SLOT_CONFLICT",
            Self::ReferenceNotFound { .. } => "NOT_FOUND",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// True for failures the caller did not cause
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    #[track_caller]
    pub(crate) fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation {
                message,
                field,
                location,
            } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::MalformedTimestamp {
                value,
                message,
                location,
            } => Self::MalformedTimestamp {
                value,
                message,
                location,
            },
            other => Self::Internal {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if err.is_unique_violation_on(PATIENT_EMAIL_CONSTRAINT) {
            return Self::DuplicateEmail { location };
        }

        if err.is_unique_violation_on(APPOINTMENT_SLOT_CONSTRAINT) {
            return Self::SlotConflict { location };
        }

        match err {
            DbError::ForeignKeyViolation { message, .. } => {
                Self::ReferenceNotFound { message, location }
            }
            other => Self::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    #[track_caller]
    fn from(err: sqlx::Error) -> Self {
        Self::from(DbError::from(err))
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        Self::Internal {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    #[track_caller]
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal {
            message: format!("Credential task failed: {}", err),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
