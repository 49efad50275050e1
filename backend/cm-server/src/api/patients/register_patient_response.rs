use cm_core::PatientId;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegisterPatientResponse {
    pub mensaje: String,
    /// Registered name, echoed back
    pub paciente: String,
    pub paciente_id: PatientId,
}
