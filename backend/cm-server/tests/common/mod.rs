#![allow(dead_code)]

//! Test infrastructure for cm-server API tests

use cm_config::Config;
use cm_server::{AppState, bootstrap, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const SLOT: &str = "2026-05-20 10:00:00";

/// AppState over a fresh in-memory database with doctor 1 seeded
pub async fn create_test_app_state() -> AppState {
    let pool = cm_db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    let config = Config::default();

    bootstrap::seed_doctor(&pool, &config.bootstrap)
        .await
        .expect("Failed to seed doctor");

    AppState::new(pool, config)
}

pub async fn create_test_app() -> Router {
    build_router(create_test_app_state().await)
}

/// POST a JSON value, returning status and parsed JSON body
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, "application/json", body.to_string()).await
}

/// POST an arbitrary body; a non-JSON response body parses as Null
pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: &str,
    body: String,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Registers a patient through the API and returns its id
pub async fn register(app: &Router, email: &str, password: &str) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/pacientes/registro",
        json!({ "nombre": "Paciente de Prueba", "email": email, "password": password }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);

    body["paciente_id"].as_i64().unwrap()
}
