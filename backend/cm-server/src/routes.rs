use crate::{AppState, health, login_patient, register_patient, schedule_appointment};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Patients
        .route("/api/pacientes/registro", post(register_patient))
        .route("/api/pacientes/login", post(login_patient))
        // Appointments
        .route("/api/citas", post(schedule_appointment))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        // Browser frontends are served from other origins
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
