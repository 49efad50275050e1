pub mod appointments;
pub mod schedule_appointment_request;
pub mod schedule_appointment_response;
