//! Startup data that must exist before the first request.

use crate::error::Result as ServerErrorResult;

use cm_config::BootstrapConfig;
use cm_db::{BOOTSTRAP_DOCTOR_ID, DoctorRepository};

use log::info;
use sqlx::SqlitePool;

/// Insert the bootstrap doctor (id 1) if it does not exist yet.
///
/// Safe to run on every start; an existing doctor 1 is left untouched.
pub async fn seed_doctor(pool: &SqlitePool, bootstrap: &BootstrapConfig) -> ServerErrorResult<()> {
    if !bootstrap.seed_doctor {
        info!("Doctor seeding disabled");
        return Ok(());
    }

    let inserted =
        DoctorRepository::seed_default(pool, &bootstrap.doctor_name, &bootstrap.doctor_specialty)
            .await?;

    if inserted {
        info!(
            "Seeded doctor {}: {} ({})",
            BOOTSTRAP_DOCTOR_ID, bootstrap.doctor_name, bootstrap.doctor_specialty
        );
    } else {
        info!("Doctor {} already present", BOOTSTRAP_DOCTOR_ID);
    }

    Ok(())
}
