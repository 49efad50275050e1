//! One-way salted password hashing with argon2id.
//!
//! Hashes are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`) so
//! the algorithm parameters travel with each stored credential.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use error_location::ErrorLocation;

/// Verified against when the account does not exist, so an unknown email
/// costs the same argon2 work as a wrong password. Uses the default params.
pub(crate) const ABSENT_ACCOUNT_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$6WKgiflLRwqw0TTz2XsUCg$WR0tbfRzdxGDra3vM4Ks1yVzfIk+GAqxYgPrZcW2WDg";

#[derive(Clone, Default)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a raw password with a fresh random salt.
    #[track_caller]
    pub fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Check a raw password against a stored PHC hash.
    ///
    /// Returns `Ok(false)` on mismatch. Errors only when the stored hash
    /// cannot be parsed or verification itself fails.
    #[track_caller]
    pub fn verify(&self, password: &str, stored_hash: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::StoredHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::StoredHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Burn one verification for a login attempt against an unknown account.
    ///
    /// Always returns `false`.
    pub fn verify_absent(&self, password: &str) -> bool {
        if let Err(e) = self.verify(password, ABSENT_ACCOUNT_HASH) {
            log::warn!("Placeholder credential check failed: {}", e);
        }
        false
    }
}
