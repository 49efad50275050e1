//! Appointment persistence.
//!
//! `create` is a single INSERT. The `UNIQUE (doctor_id, scheduled_at)`
//! constraint decides who gets a slot when two bookings race; the loser
//! receives `DbError::UniqueViolation` on `APPOINTMENT_SLOT_CONSTRAINT`.

use crate::{DbError, Result as DbErrorResult};

use cm_core::{
    Appointment, AppointmentId, AppointmentStatus, DoctorId, NewAppointment,
    format_scheduled_at, parse_scheduled_at,
};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub struct AppointmentRepository;

impl AppointmentRepository {
    pub async fn create<'e, E>(
        executor: E,
        appointment: &NewAppointment,
    ) -> DbErrorResult<AppointmentId>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let scheduled_at = format_scheduled_at(&appointment.scheduled_at);

        let result = sqlx::query(
            r#"
                INSERT INTO appointments (patient_id, doctor_id, scheduled_at, status)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(appointment.patient_id)
        .bind(appointment.doctor_id)
        .bind(scheduled_at)
        .bind(appointment.status.as_str())
        .execute(executor)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id<'e, E>(
        executor: E,
        id: AppointmentId,
    ) -> DbErrorResult<Option<Appointment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, patient_id, doctor_id, scheduled_at, status
                FROM appointments
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.map(|r| map_appointment(&r)).transpose()
    }

    /// All appointments for a doctor, earliest first
    pub async fn find_by_doctor<'e, E>(
        executor: E,
        doctor_id: DoctorId,
    ) -> DbErrorResult<Vec<Appointment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, patient_id, doctor_id, scheduled_at, status
                FROM appointments
                WHERE doctor_id = ?
                ORDER BY scheduled_at ASC
            "#,
        )
        .bind(doctor_id)
        .fetch_all(executor)
        .await?;

        rows.iter().map(map_appointment).collect()
    }
}

#[track_caller]
fn map_appointment(row: &SqliteRow) -> DbErrorResult<Appointment> {
    let scheduled_at: String = row.try_get("scheduled_at")?;
    let status: String = row.try_get("status")?;

    let scheduled_at = match parse_scheduled_at(&scheduled_at) {
        Ok(parsed) => parsed,
        Err(e) => {
            return Err(DbError::Decode {
                message: format!("Invalid appointments.scheduled_at: {}", e),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let status = match AppointmentStatus::from_str(&status) {
        Ok(status) => status,
        Err(e) => {
            return Err(DbError::Decode {
                message: format!("Invalid appointments.status: {}", e),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    Ok(Appointment {
        id: row.try_get("id")?,
        patient_id: row.try_get("patient_id")?,
        doctor_id: row.try_get("doctor_id")?,
        scheduled_at,
        status,
    })
}
