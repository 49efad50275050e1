use crate::{ApiError, messages};

use cm_services::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: messages::MISSING_REGISTRATION_DATA.into(),
        field: Some("email".into()),
        location: here(),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["mensaje"], "Faltan datos requeridos");
    assert_eq!(json["field"], "email");
}

#[tokio::test]
async fn test_bad_request_omits_field() {
    let error = ApiError::BadRequest {
        message: messages::INVALID_JSON_BODY.into(),
        location: here(),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::Internal {
        message: "disk I/O error at /var/lib/citamed.db".into(),
        location: here(),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["mensaje"], "Error interno del servidor");
}

#[tokio::test]
async fn test_slot_conflict_maps_to_409_with_spanish_message() {
    let error = ApiError::from(ServiceError::SlotConflict { location: here() });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "SLOT_CONFLICT");
    assert_eq!(json["mensaje"], "Ese horario ya está reservado con el doctor");
}

#[tokio::test]
async fn test_duplicate_email_maps_to_409() {
    let error = ApiError::from(ServiceError::DuplicateEmail { location: here() });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "DUPLICATE_EMAIL");
    assert_eq!(json["mensaje"], "El email ya está registrado");
}

#[tokio::test]
async fn test_invalid_credentials_maps_to_401() {
    let error = ApiError::from(ServiceError::InvalidCredentials { location: here() });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["mensaje"], "Email o contraseña incorrectos");
}

#[tokio::test]
async fn test_reference_not_found_maps_to_404() {
    let error = ApiError::from(ServiceError::ReferenceNotFound {
        message: "FOREIGN KEY constraint failed".into(),
        location: here(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["mensaje"], "El paciente o el doctor no existe");
}

#[tokio::test]
async fn test_malformed_timestamp_maps_to_400_on_fecha_hora() {
    let error = ApiError::from(ServiceError::MalformedTimestamp {
        value: "not-a-date".into(),
        message: "input contains invalid characters".into(),
        location: here(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MALFORMED_TIMESTAMP");
    assert_eq!(
        json["mensaje"],
        "Formato de fecha/hora inválido. Use YYYY-MM-DD HH:MM:SS"
    );
    assert_eq!(json["field"], "fecha_hora");
}

#[test]
fn test_with_validation_message_replaces_only_validation() {
    let validation = ApiError::from(ServiceError::Validation {
        message: "doctor_id is required".into(),
        field: "doctor_id",
        location: here(),
    })
    .with_validation_message(messages::MISSING_APPOINTMENT_DATA);
    let conflict = ApiError::from(ServiceError::SlotConflict { location: here() })
        .with_validation_message(messages::MISSING_APPOINTMENT_DATA);

    match validation {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Faltan datos para la cita");
            assert_eq!(field.as_deref(), Some("doctor_id"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
    match conflict {
        ApiError::Conflict { message, .. } => {
            assert_eq!(message, "Ese horario ya está reservado con el doctor");
        }
        other => panic!("Expected Conflict, got {:?}", other),
    }
}

#[test]
fn test_service_internal_converts_to_internal() {
    let error = ApiError::from(ServiceError::Internal {
        message: "pool timed out".into(),
        location: here(),
    });

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error.to_string().contains("pool timed out"));
}
