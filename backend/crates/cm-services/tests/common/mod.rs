#![allow(dead_code)]

use cm_db::{DoctorRepository, PoolSettings};
use cm_services::{IdentityService, SchedulingService};

use std::time::Duration;

use sqlx::SqlitePool;
use tempfile::TempDir;

pub const DOCTOR_ID: i64 = 1;
pub const SLOT: &str = "2026-03-10 09:30:00";

/// In-memory pool, migrated, with the bootstrap doctor seeded
pub async fn create_test_pool() -> SqlitePool {
    let pool = cm_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    seed_doctor(&pool).await;
    pool
}

/// File-backed pool for racing writers. Keep the `TempDir` alive.
pub async fn create_file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = PoolSettings {
        max_connections,
        busy_timeout: Duration::from_secs(10),
    };

    let pool = cm_db::connect(&temp_dir.path().join("citamed.db"), &settings)
        .await
        .expect("Failed to create file pool");
    seed_doctor(&pool).await;

    (temp_dir, pool)
}

async fn seed_doctor(pool: &SqlitePool) {
    DoctorRepository::seed_default(pool, "Dr. Juan Pérez", "Cardiología")
        .await
        .expect("Failed to seed doctor");
}

pub async fn create_second_doctor(pool: &SqlitePool) -> i64 {
    sqlx::query("INSERT INTO doctors (name, specialty) VALUES (?, ?)")
        .bind("Dra. Marta Ruiz")
        .bind("Dermatología")
        .execute(pool)
        .await
        .expect("Failed to create doctor")
        .last_insert_rowid()
}

pub fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// Registers a patient named after its email and returns the id
pub async fn register_patient(identity: &IdentityService, email: &str, password: &str) -> i64 {
    identity
        .register(text("Paciente de Prueba"), text(email), text(password))
        .await
        .expect("Failed to register patient")
        .id
}

pub fn services(pool: &SqlitePool) -> (IdentityService, SchedulingService) {
    (
        IdentityService::new(pool.clone()),
        SchedulingService::new(pool.clone()),
    )
}
