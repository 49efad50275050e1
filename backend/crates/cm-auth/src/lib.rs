mod credential_hasher;
mod error;


pub use credential_hasher::CredentialHasher;
pub use error::{AuthError, Result};
