// libs/schedule-grid-cell/src/services/status.rs
use shared_models::AppointmentStatus;

use crate::models::StatusCategory;

/// Map a lifecycle status to its presentation category.
///
/// Total over every status the wire can produce: unrecognized values
/// deserialize to `Unknown` and fall through to the `Info` default, so
/// rendering never fails on unexpected data.
pub fn classify(status: AppointmentStatus) -> StatusCategory {
    match status {
        AppointmentStatus::Completed => StatusCategory::Success,
        AppointmentStatus::Cancelled => StatusCategory::Danger,
        AppointmentStatus::Scheduled => StatusCategory::Info,
        AppointmentStatus::Temporary => StatusCategory::Warning,
        AppointmentStatus::CancelledForever => StatusCategory::Blocked,
        AppointmentStatus::Unknown => StatusCategory::Info,
    }
}
