use crate::bootstrap::seed_doctor;

use cm_config::BootstrapConfig;
use cm_db::DoctorRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_empty_database_when_seeding_twice_then_one_doctor_with_id_1() {
    // Given
    let pool = cm_db::connect_in_memory().await.unwrap();
    let bootstrap = BootstrapConfig::default();

    // When
    seed_doctor(&pool, &bootstrap).await.unwrap();
    seed_doctor(&pool, &bootstrap).await.unwrap();

    // Then
    let doctors = DoctorRepository::find_all(&pool).await.unwrap();
    assert_that!(doctors.len(), eq(1));
    assert_that!(doctors[0].id, eq(1));
    assert_that!(doctors[0].name, eq("Dr. Juan Pérez"));
    assert_that!(doctors[0].specialty, eq("Cardiología"));
}

#[tokio::test]
async fn given_seeding_disabled_when_seeding_then_no_doctor() {
    // Given
    let pool = cm_db::connect_in_memory().await.unwrap();
    let bootstrap = BootstrapConfig {
        seed_doctor: false,
        ..BootstrapConfig::default()
    };

    // When
    seed_doctor(&pool, &bootstrap).await.unwrap();

    // Then
    let doctor = DoctorRepository::find_by_id(&pool, 1).await.unwrap();
    assert_that!(doctor, none());
}
