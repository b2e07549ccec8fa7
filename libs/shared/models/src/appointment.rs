// libs/shared/models/src/appointment.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// An appointment as supplied by the fetch service. Read-only to the grid
/// core: lifecycle transitions happen in the services that own the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    /// Calendar date, compared by exact year/month/day equality. The caller
    /// supplies a comparable date; no time-zone normalization happens here.
    pub date: NaiveDate,
    /// Time of day. Only the hour matters for slot placement.
    pub time: NaiveTime,
    /// Absent in aggregate feeds where doctor identity is not tracked.
    #[serde(default)]
    pub doctor_id: Option<Uuid>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    Temporary,
    CancelledForever,
    /// Catch-all for wire values outside the known set. Rendering must never
    /// fail on unexpected data, so deserialization is total.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "SCHEDULED"),
            AppointmentStatus::Completed => write!(f, "COMPLETED"),
            AppointmentStatus::Cancelled => write!(f, "CANCELLED"),
            AppointmentStatus::Temporary => write!(f, "TEMPORARY"),
            AppointmentStatus::CancelledForever => write!(f, "CANCELLED_FOREVER"),
            AppointmentStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
