//! Patient identity and appointment scheduling on top of the SQLite store.
//!
//! Both services are cheap to clone (a pool handle plus stateless helpers)
//! and hold no state between calls. Every write is one INSERT inside its own
//! transaction; uniqueness is decided by the store's constraints.

mod error;
mod identity_service;
mod scheduling_service;

pub use error::{Result, ServiceError};
pub use identity_service::{IdentityService, RegisteredPatient};
pub use scheduling_service::SchedulingService;
