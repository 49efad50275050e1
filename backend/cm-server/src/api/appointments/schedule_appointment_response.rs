use cm_core::AppointmentId;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ScheduleAppointmentResponse {
    pub mensaje: String,
    pub cita_id: AppointmentId,
}
