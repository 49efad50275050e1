//! Appointment entity - one patient booked with one doctor at one instant.
//!
//! The pair (`doctor_id`, `scheduled_at`) is unique across all appointments.
//! That rule lives in the database schema, not here: the store rejects the
//! second insert for a taken slot.

use crate::{AppointmentId, AppointmentStatus, DoctorId, PatientId};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    /// Naive local time, second precision
    pub scheduled_at: NaiveDateTime,
    pub status: AppointmentStatus,
}

/// Appointment fields supplied when booking, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub scheduled_at: NaiveDateTime,
    pub status: AppointmentStatus,
}

impl NewAppointment {
    /// Create a booking request in the initial `Pending` state
    pub fn pending(
        patient_id: PatientId,
        doctor_id: DoctorId,
        scheduled_at: NaiveDateTime,
    ) -> Self {
        Self {
            patient_id,
            doctor_id,
            scheduled_at,
            status: AppointmentStatus::Pending,
        }
    }
}
