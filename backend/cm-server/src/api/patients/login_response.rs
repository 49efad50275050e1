use cm_core::PatientId;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub mensaje: String,
    pub paciente_id: PatientId,
}
