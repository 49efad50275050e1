//! Required-field checks shared by the services.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Require a text field to be present and not blank.
///
/// The value is returned untrimmed.
#[track_caller]
pub fn require_text(field: &'static str, value: Option<String>) -> CoreErrorResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation {
            message: format!("{} is required", field),
            field,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Require an identity field to be present and positive.
///
/// Zero is treated as missing; SQLite never assigns it.
#[track_caller]
pub fn require_id(field: &'static str, value: Option<i64>) -> CoreErrorResult<i64> {
    match value {
        Some(id) if id > 0 => Ok(id),
        Some(id) => Err(CoreError::Validation {
            message: format!("{} must be a positive integer, got {}", field, id),
            field,
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Err(CoreError::Validation {
            message: format!("{} is required", field),
            field,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Require a secret (password) to be present and non-empty.
///
/// Unlike [`require_text`], whitespace is significant and kept.
#[track_caller]
pub fn require_secret(field: &'static str, value: Option<String>) -> CoreErrorResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CoreError::Validation {
            message: format!("{} is required", field),
            field,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
