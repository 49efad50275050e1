//! Appointment booking with one-doctor-one-slot exclusivity.

use crate::Result as ServiceErrorResult;

use cm_core::{AppointmentId, NewAppointment, parse_scheduled_at, require_id, require_text};
use cm_db::AppointmentRepository;

use log::{error, info, warn};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SchedulingService {
    pool: SqlitePool,
}

impl SchedulingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Book `doctor_id` for `patient_id` at `scheduled_at`
    /// (`YYYY-MM-DD HH:MM:SS`, naive local time).
    ///
    /// The appointment starts `Pending`. A slot already held by the doctor
    /// fails with `SlotConflict`; an unknown patient or doctor fails with
    /// `ReferenceNotFound`. Nothing is retried.
    pub async fn schedule(
        &self,
        patient_id: Option<i64>,
        doctor_id: Option<i64>,
        scheduled_at: Option<String>,
    ) -> ServiceErrorResult<AppointmentId> {
        let patient_id = require_id("paciente_id", patient_id)?;
        let doctor_id = require_id("doctor_id", doctor_id)?;
        let scheduled_at = require_text("fecha_hora", scheduled_at)?;

        let scheduled_at = parse_scheduled_at(&scheduled_at)
            .inspect_err(|e| warn!("Booking rejected: {}", e))?;

        let appointment = NewAppointment::pending(patient_id, doctor_id, scheduled_at);

        match self.insert_appointment(&appointment).await {
            Ok(id) => {
                info!(
                    "Appointment {} booked: patient {} with doctor {} at {}",
                    id, patient_id, doctor_id, scheduled_at
                );
                Ok(id)
            }
            Err(e) => {
                if e.is_internal() {
                    error!("Booking failed: {}", e);
                } else {
                    warn!(
                        "Booking rejected for doctor {} at {}: {}",
                        doctor_id, scheduled_at, e
                    );
                }
                Err(e)
            }
        }
    }

    async fn insert_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> ServiceErrorResult<AppointmentId> {
        let mut tx = self.pool.begin().await?;

        let id = AppointmentRepository::create(&mut *tx, appointment).await?;

        tx.commit().await?;
        Ok(id)
    }
}
