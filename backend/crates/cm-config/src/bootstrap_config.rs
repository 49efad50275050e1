use crate::{ConfigError, ConfigErrorResult, DEFAULT_DOCTOR_NAME, DEFAULT_DOCTOR_SPECIALTY};

use serde::Deserialize;

/// Startup seeding of the doctor with id 1
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub seed_doctor: bool,
    pub doctor_name: String,
    pub doctor_specialty: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            seed_doctor: true,
            doctor_name: String::from(DEFAULT_DOCTOR_NAME),
            doctor_specialty: String::from(DEFAULT_DOCTOR_SPECIALTY),
        }
    }
}

impl BootstrapConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.seed_doctor {
            return Ok(());
        }

        if self.doctor_name.trim().is_empty() {
            return Err(ConfigError::bootstrap(
                "bootstrap.doctor_name must not be empty when seed_doctor is enabled",
            ));
        }

        if self.doctor_specialty.trim().is_empty() {
            return Err(ConfigError::bootstrap(
                "bootstrap.doctor_specialty must not be empty when seed_doctor is enabled",
            ));
        }

        Ok(())
    }
}
