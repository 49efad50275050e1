//! Patient entity - a registered user who books appointments.

use crate::PatientId;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered patient.
///
/// `password_hash` is an argon2 PHC string. The raw password is never stored.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    /// Unique, compared byte for byte
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl fmt::Debug for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Patient")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Patient fields supplied on registration, before the store assigns an id.
#[derive(Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewPatient {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            email,
            password_hash,
        }
    }
}

impl fmt::Debug for NewPatient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewPatient")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
