//! Patient persistence.
//!
//! Email uniqueness is enforced only by the `patients.email` constraint.
//! `create` never checks for an existing row first; a duplicate surfaces as
//! `DbError::UniqueViolation` from the insert itself.

use crate::Result as DbErrorResult;

use cm_core::{NewPatient, Patient, PatientId};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub struct PatientRepository;

impl PatientRepository {
    pub async fn create<'e, E>(executor: E, patient: &NewPatient) -> DbErrorResult<PatientId>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO patients (name, email, password_hash)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(&patient.name)
        .bind(&patient.email)
        .bind(&patient.password_hash)
        .execute(executor)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Exact-match lookup; no case folding
    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<Patient>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, password_hash
                FROM patients
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(executor)
        .await?;

        row.map(|r| map_patient(&r)).transpose()
    }

    pub async fn find_by_id<'e, E>(executor: E, id: PatientId) -> DbErrorResult<Option<Patient>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, password_hash
                FROM patients
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.map(|r| map_patient(&r)).transpose()
    }
}

fn map_patient(row: &SqliteRow) -> DbErrorResult<Patient> {
    Ok(Patient {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
    })
}
