pub mod appointments;
pub mod error;
pub mod messages;
pub mod patients;
