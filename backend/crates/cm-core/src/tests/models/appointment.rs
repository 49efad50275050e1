use crate::{AppointmentStatus, NewAppointment, parse_scheduled_at};

#[test]
fn test_new_appointment_starts_pending() {
    let at = parse_scheduled_at("2026-01-01 11:00:00").unwrap();

    let appointment = NewAppointment::pending(7, 1, at);

    assert_eq!(appointment.patient_id, 7);
    assert_eq!(appointment.doctor_id, 1);
    assert_eq!(appointment.scheduled_at, at);
    assert_eq!(appointment.status, AppointmentStatus::Pending);
}
