use crate::DoctorId;

use serde::{Deserialize, Serialize};

/// A doctor that appointments are booked against. Seeded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
}
