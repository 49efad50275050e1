use std::fmt;

use serde::Deserialize;

/// Every field is optional at the JSON level so that a missing field is
/// reported as "Faltan datos requeridos" rather than a parse failure.
#[derive(Deserialize)]
pub struct RegisterPatientRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for RegisterPatientRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterPatientRequest")
            .field("nombre", &self.nombre)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
