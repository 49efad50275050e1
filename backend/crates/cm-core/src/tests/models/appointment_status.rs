use crate::AppointmentStatus;

use std::str::FromStr;

#[test]
fn test_appointment_status_as_str() {
    assert_eq!(AppointmentStatus::Pending.as_str(), "pending");
}

#[test]
fn test_appointment_status_from_str() {
    assert_eq!(
        AppointmentStatus::from_str("pending").unwrap(),
        AppointmentStatus::Pending
    );
    assert!(AppointmentStatus::from_str("Pendiente").is_err());
    assert!(AppointmentStatus::from_str("").is_err());
}

#[test]
fn test_appointment_status_default() {
    assert_eq!(AppointmentStatus::default(), AppointmentStatus::Pending);
}

#[test]
fn test_appointment_status_display() {
    assert_eq!(AppointmentStatus::Pending.to_string(), "pending");
}
