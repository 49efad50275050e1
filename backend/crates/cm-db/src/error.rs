use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Column list SQLite reports when a second patient reuses an email
pub const PATIENT_EMAIL_CONSTRAINT: &str = "patients.email";

/// Column list SQLite reports when a doctor's slot is already booked
pub const APPOINTMENT_SLOT_CONSTRAINT: &str = "appointments.doctor_id, appointments.scheduled_at";

const UNIQUE_MESSAGE_PREFIX: &str = "UNIQUE constraint failed: ";

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A UNIQUE or PRIMARY KEY constraint rejected the write.
    /// `constraint` is the `table.column` list SQLite names in its message.
    #[error("Unique constraint violated on {constraint} {location}")]
    UniqueViolation {
        constraint: String,
        location: ErrorLocation,
    },

    #[error("Foreign key constraint violated: {message} {location}")]
    ForeignKeyViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid stored value: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// True when this is a unique violation on exactly `constraint`
    pub fn is_unique_violation_on(&self, constraint: &str) -> bool {
        matches!(self, DbError::UniqueViolation { constraint: c, .. } if c == constraint)
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, DbError::ForeignKeyViolation { .. })
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(ref db_err) = source {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    let constraint = message
                        .strip_prefix(UNIQUE_MESSAGE_PREFIX)
                        .unwrap_or(message)
                        .trim()
                        .to_string();
                    return Self::UniqueViolation {
                        constraint,
                        location,
                    };
                }
                ErrorKind::ForeignKeyViolation => {
                    return Self::ForeignKeyViolation {
                        message: message.to_string(),
                        location,
                    };
                }
                _ => {}
            }
        }

        Self::Sqlx { source, location }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
