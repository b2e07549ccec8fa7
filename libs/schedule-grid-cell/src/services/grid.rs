// libs/schedule-grid-cell/src/services/grid.rs
use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use shared_models::{Appointment, Doctor, TimeSlot};
use shared_utils::time;

use crate::models::{CalendarContext, SlotAction, SlotRef, StatusCategory, ViewMode};
use crate::services::{dispatch, resolver, status};

/// One resolved occupant of a cell, paired with its presentation category.
#[derive(Debug, Clone, PartialEq)]
pub struct CellOccupant {
    pub appointment: Appointment,
    pub category: StatusCategory,
}

/// One cell of the rendered grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub slot: SlotRef,
    pub occupants: Vec<CellOccupant>,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}

/// Per-render façade over one snapshot of appointments, doctors and
/// calendar context.
///
/// The session borrows its inputs for a single render pass and holds no
/// caches or state of its own; rebuild it whenever any input changes and
/// discard it afterwards. Every accessor is a pure function of the snapshot,
/// and no error escapes to the caller: malformed inputs degrade to empty
/// buckets and default categories.
///
/// `evaluated_at` pins "now" for the highlight predicates so identical
/// inputs always render identically.
pub struct GridSession<'a> {
    appointments: &'a [Appointment],
    doctors: &'a [Doctor],
    context: &'a CalendarContext,
    evaluated_at: DateTime<Utc>,
}

impl<'a> GridSession<'a> {
    pub fn new(
        appointments: &'a [Appointment],
        doctors: &'a [Doctor],
        context: &'a CalendarContext,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        debug!(
            appointments = appointments.len(),
            doctors = doctors.len(),
            days = context.display_days.len(),
            slots = context.time_slots.len(),
            mode = ?context.mode,
            "building grid session"
        );
        Self {
            appointments,
            doctors,
            context,
            evaluated_at,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.context.mode
    }

    /// Number of doctor columns per (date, slot) pair: one per roster entry
    /// in day-mode, a single collapsed column in week-mode.
    pub fn doctor_columns(&self) -> usize {
        match self.context.mode {
            ViewMode::Day => self.doctors.len(),
            ViewMode::Week => 1,
        }
    }

    /// The doctor backing a day-mode column, if the column is in range.
    /// Week-mode columns are not doctor-addressed and yield `None`.
    pub fn doctor_at(&self, doctor_column: Option<usize>) -> Option<&'a Doctor> {
        match self.context.mode {
            ViewMode::Day => doctor_column.and_then(|column| self.doctors.get(column)),
            ViewMode::Week => None,
        }
    }

    /// Ordered bucket of appointments occupying the cell.
    pub fn bucket(
        &self,
        date: NaiveDate,
        slot: &TimeSlot,
        doctor_column: Option<usize>,
    ) -> Vec<Appointment> {
        resolver::resolve(
            self.appointments,
            date,
            slot,
            doctor_column,
            self.context.mode,
            self.doctors,
        )
    }

    /// The cell's bucket with each occupant classified for rendering.
    pub fn cell(&self, date: NaiveDate, slot: &TimeSlot, doctor_column: Option<usize>) -> GridCell {
        let occupants = self
            .bucket(date, slot, doctor_column)
            .into_iter()
            .map(|appointment| CellOccupant {
                category: status::classify(appointment.status),
                appointment,
            })
            .collect();
        GridCell {
            slot: SlotRef {
                date,
                slot: slot.clone(),
                doctor_column,
            },
            occupants,
        }
    }

    /// Rectangular iteration over the whole visible grid:
    /// `display_days × time_slots × doctor columns` (day-mode) or
    /// `display_days × time_slots` (week-mode, collapsed column).
    pub fn cells(&self) -> Vec<GridCell> {
        let columns: Vec<Option<usize>> = match self.context.mode {
            ViewMode::Day => (0..self.doctors.len()).map(Some).collect(),
            ViewMode::Week => vec![None],
        };

        let mut cells =
            Vec::with_capacity(self.context.display_days.len() * self.context.time_slots.len() * columns.len());
        for &date in &self.context.display_days {
            for slot in &self.context.time_slots {
                for &column in &columns {
                    cells.push(self.cell(date, slot, column));
                }
            }
        }
        cells
    }

    /// Decide what a click on the cell does. Day-mode binds the column's
    /// doctor into a creation request; an out-of-range column degrades to
    /// no doctor rather than failing.
    pub fn click(
        &self,
        date: NaiveDate,
        slot: &TimeSlot,
        doctor_column: Option<usize>,
    ) -> SlotAction {
        let bucket = self.bucket(date, slot, doctor_column);
        let doctor = self.doctor_at(doctor_column);
        dispatch::dispatch_click(self.context.mode, date, slot, bucket, doctor)
    }

    /// Highlight predicate: is `date` the session's evaluation day?
    pub fn is_today(&self, date: NaiveDate) -> bool {
        time::is_today(date, self.evaluated_at)
    }

    /// Highlight predicate: does the slot label's hour equal the session's
    /// evaluation hour? Never used for bucketing.
    pub fn is_current_hour(&self, slot: &TimeSlot) -> bool {
        time::is_current_hour(slot, self.evaluated_at)
    }
}
