pub mod appointment;
pub mod appointment_status;
pub mod doctor;
pub mod patient;
