mod appointment;
mod appointment_status;
mod patient;
