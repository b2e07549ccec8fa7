// libs/shared/models/src/doctor.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Roster entry from the doctor service. The grid only reads `id`; the
/// display attributes are carried for the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub specialty: Option<String>,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
