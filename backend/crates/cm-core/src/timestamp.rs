//! Appointment timestamps.
//!
//! Clients send `YYYY-MM-DD HH:MM:SS` as naive local time. No timezone
//! conversion happens anywhere. The same format is used for storage, so two
//! spellings of one instant (`2026-1-1 9:00:00`, `2026-01-01 09:00:00`)
//! normalize to the same slot.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{NaiveDateTime, Timelike};
use error_location::ErrorLocation;

pub const SCHEDULED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a client-supplied appointment timestamp.
///
/// chrono treats format whitespace as optional and accepts a signed year,
/// so the date and time must first be separated by exactly one ASCII space
/// and both must start with a digit. Leap seconds (`:60`) are rejected:
/// they have no canonical storage form.
#[track_caller]
pub fn parse_scheduled_at(value: &str) -> CoreErrorResult<NaiveDateTime> {
    if let Err(message) = check_shape(value) {
        return Err(CoreError::MalformedTimestamp {
            value: value.to_string(),
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let parsed = match NaiveDateTime::parse_from_str(value, SCHEDULED_AT_FORMAT) {
        Ok(parsed) => parsed,
        Err(e) => {
            return Err(CoreError::MalformedTimestamp {
                value: value.to_string(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(CoreError::MalformedTimestamp {
            value: value.to_string(),
            message: "leap seconds are not supported".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(parsed)
}

/// Canonical text form, used as the stored slot key
pub fn format_scheduled_at(value: &NaiveDateTime) -> String {
    value.format(SCHEDULED_AT_FORMAT).to_string()
}

fn check_shape(value: &str) -> Result<(), &'static str> {
    let Some((date, time)) = value.split_once(' ') else {
        return Err("expected a single space between date and time");
    };

    if date.chars().chain(time.chars()).any(char::is_whitespace) {
        return Err("unexpected whitespace");
    }

    let starts_with_digit = |part: &str| part.starts_with(|c: char| c.is_ascii_digit());
    if !starts_with_digit(date) || !starts_with_digit(time) {
        return Err("date and time must start with a digit");
    }

    Ok(())
}
