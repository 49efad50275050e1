use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScheduleAppointmentRequest {
    pub paciente_id: Option<i64>,
    pub doctor_id: Option<i64>,
    /// `YYYY-MM-DD HH:MM:SS`, naive local time
    pub fecha_hora: Option<String>,
}
