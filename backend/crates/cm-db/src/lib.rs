pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{PoolSettings, connect, connect_in_memory, ping, run_migrations};
pub use error::{APPOINTMENT_SLOT_CONSTRAINT, DbError, PATIENT_EMAIL_CONSTRAINT, Result};
pub use repositories::appointment_repository::AppointmentRepository;
pub use repositories::doctor_repository::{BOOTSTRAP_DOCTOR_ID, DoctorRepository};
pub use repositories::patient_repository::PatientRepository;
