//! Appointment REST API handlers

use crate::{
    ApiError, ApiResult, AppState, ScheduleAppointmentRequest, ScheduleAppointmentResponse,
    messages,
};

use cm_services::SchedulingService;

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

/// POST /api/citas
///
/// Book a doctor for a patient. 409 when the doctor already has an
/// appointment at that exact time.
pub async fn schedule_appointment(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleAppointmentRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ScheduleAppointmentResponse>)> {
    let Json(req) = payload?;

    let scheduling = SchedulingService::new(state.pool.clone());
    let appointment_id = scheduling
        .schedule(req.paciente_id, req.doctor_id, req.fecha_hora)
        .await
        .map_err(|e| {
            ApiError::from(e).with_validation_message(messages::MISSING_APPOINTMENT_DATA)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(ScheduleAppointmentResponse {
            mensaje: messages::APPOINTMENT_BOOKED.to_string(),
            cita_id: appointment_id,
        }),
    ))
}
