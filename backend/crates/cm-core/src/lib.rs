pub mod error;
pub mod models;
pub mod timestamp;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::appointment::{Appointment, NewAppointment};
pub use models::appointment_status::AppointmentStatus;
pub use models::doctor::Doctor;
pub use models::patient::{NewPatient, Patient};
pub use timestamp::{SCHEDULED_AT_FORMAT, format_scheduled_at, parse_scheduled_at};
pub use validation::{require_id, require_secret, require_text};

/// Row identity of a patient (SQLite INTEGER PRIMARY KEY)
pub type PatientId = i64;

/// Row identity of a doctor
pub type DoctorId = i64;

/// Row identity of an appointment
pub type AppointmentId = i64;
