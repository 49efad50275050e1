use crate::Result as DbErrorResult;

use cm_core::{Doctor, DoctorId};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Identity of the doctor inserted at bootstrap
pub const BOOTSTRAP_DOCTOR_ID: DoctorId = 1;

pub struct DoctorRepository;

impl DoctorRepository {
    pub async fn find_by_id<'e, E>(executor: E, id: DoctorId) -> DbErrorResult<Option<Doctor>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query("SELECT id, name, specialty FROM doctors WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        row.map(|r| map_doctor(&r)).transpose()
    }

    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Doctor>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query("SELECT id, name, specialty FROM doctors ORDER BY id")
            .fetch_all(executor)
            .await?;

        rows.iter().map(map_doctor).collect()
    }

    /// Insert the bootstrap doctor with id 1 unless that id is taken.
    ///
    /// Idempotent. Returns true when a row was inserted.
    pub async fn seed_default<'e, E>(
        executor: E,
        name: &str,
        specialty: &str,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result =
            sqlx::query("INSERT OR IGNORE INTO doctors (id, name, specialty) VALUES (?, ?, ?)")
                .bind(BOOTSTRAP_DOCTOR_ID)
                .bind(name)
                .bind(specialty)
                .execute(executor)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_doctor(row: &SqliteRow) -> DbErrorResult<Doctor> {
    Ok(Doctor {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        specialty: row.try_get("specialty")?,
    })
}
