//! Patient registration and login.

use crate::{Result as ServiceErrorResult, ServiceError};

use cm_auth::CredentialHasher;
use cm_core::{NewPatient, PatientId, require_secret, require_text};
use cm_db::PatientRepository;

use log::{error, info, warn};
use sqlx::SqlitePool;

/// Outcome of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredPatient {
    pub id: PatientId,
    pub name: String,
}

#[derive(Clone)]
pub struct IdentityService {
    pool: SqlitePool,
    hasher: CredentialHasher,
}

impl IdentityService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            hasher: CredentialHasher::new(),
        }
    }

    /// Register a patient with a freshly salted password hash.
    ///
    /// There is no lookup before the insert; a taken email is reported by
    /// the `patients.email` constraint as `DuplicateEmail`.
    pub async fn register(
        &self,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> ServiceErrorResult<RegisteredPatient> {
        let name = require_text("nombre", name)?;
        let email = require_text("email", email)?;
        let password = require_secret("password", password)?;

        let hasher = self.hasher.clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

        let new_patient = NewPatient::new(name, email, password_hash);

        match self.insert_patient(&new_patient).await {
            Ok(id) => {
                info!("Patient {} registered", id);
                Ok(RegisteredPatient {
                    id,
                    name: new_patient.name,
                })
            }
            Err(e) => {
                match &e {
                    ServiceError::DuplicateEmail { .. } => {
                        warn!("Registration rejected: email already registered")
                    }
                    other => error!("Registration failed: {}", other),
                }
                Err(e)
            }
        }
    }

    /// Resolve a patient id from an email and raw password.
    ///
    /// Unknown email, wrong password and missing fields are all the same
    /// `InvalidCredentials`. An unknown email still pays for one argon2
    /// verification.
    pub async fn authenticate(
        &self,
        email: Option<String>,
        password: Option<String>,
    ) -> ServiceErrorResult<PatientId> {
        let (Some(email), Some(password)) = (email, password) else {
            warn!("Login rejected: missing credentials");
            return Err(ServiceError::invalid_credentials());
        };

        if email.is_empty() || password.is_empty() {
            warn!("Login rejected: missing credentials");
            return Err(ServiceError::invalid_credentials());
        }

        let patient = PatientRepository::find_by_email(&self.pool, &email)
            .await
            .inspect_err(|e| error!("Login lookup failed: {}", e))?;

        let hasher = self.hasher.clone();

        let Some(patient) = patient else {
            tokio::task::spawn_blocking(move || hasher.verify_absent(&password)).await?;
            warn!("Login rejected: invalid credentials");
            return Err(ServiceError::invalid_credentials());
        };

        let stored_hash = patient.password_hash;
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await?
            .inspect_err(|e| error!("Patient {} has an unreadable hash: {}", patient.id, e))?;

        if !verified {
            warn!("Login rejected: invalid credentials");
            return Err(ServiceError::invalid_credentials());
        }

        info!("Patient {} logged in", patient.id);
        Ok(patient.id)
    }

    async fn insert_patient(&self, patient: &NewPatient) -> ServiceErrorResult<PatientId> {
        let mut tx = self.pool.begin().await?;

        let id = PatientRepository::create(&mut *tx, patient).await?;

        tx.commit().await?;
        Ok(id)
    }
}
