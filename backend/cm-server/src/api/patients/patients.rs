//! Patient REST API handlers

use crate::{
    ApiError, ApiResult, AppState, LoginRequest, LoginResponse, RegisterPatientRequest,
    RegisterPatientResponse, messages,
};

use cm_services::IdentityService;

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

/// POST /api/pacientes/registro
///
/// Register a patient. 409 when the email is taken.
pub async fn register_patient(
    State(state): State<AppState>,
    payload: Result<Json<RegisterPatientRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterPatientResponse>)> {
    let Json(req) = payload?;

    let identity = IdentityService::new(state.pool.clone());
    let registered = identity
        .register(req.nombre, req.email, req.password)
        .await
        .map_err(|e| {
            ApiError::from(e).with_validation_message(messages::MISSING_REGISTRATION_DATA)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterPatientResponse {
            mensaje: messages::REGISTRATION_SUCCEEDED.to_string(),
            paciente: registered.name,
            paciente_id: registered.id,
        }),
    ))
}

/// POST /api/pacientes/login
///
/// Exchange email and password for the patient id. Any failure to match
/// is the same 401.
pub async fn login_patient(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(req) = payload?;

    let identity = IdentityService::new(state.pool.clone());
    let patient_id = identity.authenticate(req.email, req.password).await?;

    Ok(Json(LoginResponse {
        mensaje: messages::LOGIN_SUCCEEDED.to_string(),
        paciente_id: patient_id,
    }))
}
