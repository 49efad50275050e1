pub mod appointment_repository;
pub mod doctor_repository;
pub mod patient_repository;
