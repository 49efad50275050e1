use cm_db::{DoctorRepository, PoolSettings};

use std::time::Duration;

use sqlx::SqlitePool;
use tempfile::TempDir;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    cm_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// File-backed pool with several connections, for tests that need real
/// concurrent writers. Keep the `TempDir` alive for the test's duration.
pub async fn create_file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let settings = PoolSettings {
        max_connections,
        busy_timeout: Duration::from_secs(10),
    };

    let pool = cm_db::connect(&temp_dir.path().join("citamed.db"), &settings)
        .await
        .expect("Failed to create file pool");

    (temp_dir, pool)
}

/// Inserts the bootstrap doctor (id 1)
pub async fn seed_doctor(pool: &SqlitePool) {
    DoctorRepository::seed_default(pool, "Dr. Juan Pérez", "Cardiología")
        .await
        .expect("Failed to seed doctor");
}

/// Inserts an extra doctor and returns its id.
/// Use sqlx::query directly: repositories expose no doctor insert.
pub async fn create_test_doctor(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO doctors (name, specialty) VALUES (?, ?)")
        .bind(name)
        .bind("Medicina General")
        .execute(pool)
        .await
        .expect("Failed to create test doctor")
        .last_insert_rowid()
}
