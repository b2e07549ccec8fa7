// libs/schedule-grid-cell/src/services/dispatch.rs
use chrono::NaiveDate;

use shared_models::{Appointment, Doctor, TimeSlot};

use crate::models::{SlotAction, ViewMode};

/// Decide the single action for a click on a cell, given its resolved
/// bucket. Rules, in order:
///
/// 1. Week-mode always requests creation, passing the bucket through
///    unmodified; the caller decides whether a non-empty bucket means
///    disambiguation. Week view never auto-opens an appointment and never
///    binds a doctor.
/// 2. Day-mode with a non-empty bucket opens disambiguation. A single
///    occupant routes through the same list as many; the click contract is
///    uniform regardless of bucket size.
/// 3. Day-mode with an empty bucket requests creation in the column
///    doctor's name.
pub fn dispatch_click(
    mode: ViewMode,
    date: NaiveDate,
    slot: &TimeSlot,
    bucket: Vec<Appointment>,
    doctor: Option<&Doctor>,
) -> SlotAction {
    match mode {
        ViewMode::Week => SlotAction::RequestCreate {
            date,
            slot: slot.clone(),
            bucket,
            doctor: None,
        },
        ViewMode::Day if !bucket.is_empty() => SlotAction::OpenDisambiguation { bucket },
        ViewMode::Day => SlotAction::RequestCreate {
            date,
            slot: slot.clone(),
            bucket: Vec::new(),
            doctor: doctor.cloned(),
        },
    }
}
