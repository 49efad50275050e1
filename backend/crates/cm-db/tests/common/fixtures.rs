use cm_core::{NewAppointment, NewPatient, parse_scheduled_at};
use cm_db::PatientRepository;

use sqlx::SqlitePool;

/// Creates a NewPatient with a placeholder hash (repositories never hash)
pub fn create_test_patient(email: &str) -> NewPatient {
    NewPatient::new(
        "Test Patient".to_string(),
        email.to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    )
}

/// Inserts a patient and returns its id
pub async fn insert_test_patient(pool: &SqlitePool, email: &str) -> i64 {
    PatientRepository::create(pool, &create_test_patient(email))
        .await
        .expect("Failed to insert test patient")
}

/// Creates a pending appointment request at a canonical timestamp
pub fn create_test_appointment(patient_id: i64, doctor_id: i64, at: &str) -> NewAppointment {
    NewAppointment::pending(
        patient_id,
        doctor_id,
        parse_scheduled_at(at).expect("Invalid fixture timestamp"),
    )
}
