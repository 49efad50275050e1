pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    appointments::{
        appointments::schedule_appointment,
        schedule_appointment_request::ScheduleAppointmentRequest,
        schedule_appointment_response::ScheduleAppointmentResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    messages,
    patients::{
        login_request::LoginRequest,
        login_response::LoginResponse,
        patients::{login_patient, register_patient},
        register_patient_request::RegisterPatientRequest,
        register_patient_response::RegisterPatientResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
