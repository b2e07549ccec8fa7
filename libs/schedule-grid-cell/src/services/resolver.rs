// libs/schedule-grid-cell/src/services/resolver.rs
//
// Slot identity and per-cell bucketing. Both functions are pure and total:
// malformed input degrades to "no match", never to an error, because a
// calendar render must not fail on one bad record.

use chrono::{NaiveDate, Timelike};
use tracing::debug;

use shared_models::{Appointment, Doctor, TimeSlot};

use crate::models::ViewMode;

/// Cell-identity predicate: does `appointment` occupy the cell at
/// (`date`, `slot`, `doctor_column`) under the given mode?
///
/// Date matches by exact calendar-day equality. Time matches on the hour
/// only; minutes are ignored, so 09:05 and 09:40 both land in "09:00". In
/// week-mode the doctor dimension is collapsed and always matches. In
/// day-mode the column must reference a doctor whose id equals the
/// appointment's `doctor_id`; a missing column, an out-of-range index or an
/// absent `doctor_id` all yield false.
pub fn slot_matches(
    appointment: &Appointment,
    date: NaiveDate,
    slot: &TimeSlot,
    doctor_column: Option<usize>,
    mode: ViewMode,
    doctors: &[Doctor],
) -> bool {
    if appointment.date != date {
        return false;
    }

    match slot.hour() {
        Some(hour) if hour == appointment.time.hour() => {}
        Some(_) => return false,
        None => {
            debug!(label = %slot, "unparseable slot label, treating as no match");
            return false;
        }
    }

    match mode {
        ViewMode::Week => true,
        ViewMode::Day => {
            let Some(column) = doctor_column else {
                return false;
            };
            match doctors.get(column) {
                Some(doctor) => appointment.doctor_id == Some(doctor.id),
                None => {
                    debug!(column, roster = doctors.len(), "doctor column out of range");
                    false
                }
            }
        }
    }
}

/// Ordered bucket of appointments occupying one cell.
///
/// A stable filter over the input collection: relative order is preserved,
/// nothing is re-sorted, and zero, one or many occupants are all valid.
/// O(appointments) per call with no internal memoization; callers iterating
/// a large grid should pre-filter the collection to the visible range.
pub fn resolve(
    appointments: &[Appointment],
    date: NaiveDate,
    slot: &TimeSlot,
    doctor_column: Option<usize>,
    mode: ViewMode,
    doctors: &[Doctor],
) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|appointment| slot_matches(appointment, date, slot, doctor_column, mode, doctors))
        .cloned()
        .collect()
}
