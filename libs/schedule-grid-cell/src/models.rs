// libs/schedule-grid-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::{Appointment, Doctor, TimeSlot};

// ==============================================================================
// GRID CONTEXT
// ==============================================================================

/// Viewing mode for the scheduling grid.
///
/// Day-mode keys cells by a specific doctor column; week-mode collapses the
/// doctor dimension so every doctor's appointments share one cell per hour.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Day,
    Week,
}

impl ViewMode {
    pub fn is_week(self) -> bool {
        matches!(self, ViewMode::Week)
    }
}

/// Per-render grid inputs supplied by the calendar/date-range provider.
/// Rebuilt from scratch on every appointment/doctor/context change; never
/// cached across renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarContext {
    /// Ordered sequence of visible dates.
    pub display_days: Vec<NaiveDate>,
    /// Ordered sequence of hour-granularity slot labels.
    pub time_slots: Vec<TimeSlot>,
    pub mode: ViewMode,
}

/// Coordinate of one cell within the visible grid. `doctor_column` positions
/// into the roster slice in day-mode and is `None` in week-mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub doctor_column: Option<usize>,
}

// ==============================================================================
// PRESENTATION CATEGORIES
// ==============================================================================

/// Presentation classification derived from an appointment's lifecycle
/// status. Five disjoint categories; `Info` doubles as the default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Success,
    Danger,
    Info,
    Warning,
    Blocked,
}

impl StatusCategory {
    /// Utility classes consumed by the rendering layer.
    pub fn css_classes(self) -> &'static str {
        match self {
            StatusCategory::Success => "bg-green-100 border-green-200 text-green-800",
            StatusCategory::Danger => "bg-red-100 border-red-200 text-red-800",
            StatusCategory::Info => "bg-blue-100 border-blue-200 text-blue-800",
            StatusCategory::Warning => "bg-yellow-100 border-yellow-200 text-yellow-800",
            StatusCategory::Blocked => "bg-pink-100 border-pink-200 text-pink-800",
        }
    }
}

// ==============================================================================
// INTERACTION ACTIONS
// ==============================================================================

/// The single next UI action for a slot activation, consumed by the
/// dialog/navigation layer. The dispatcher only describes the action; it
/// never opens anything itself.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SlotAction {
    /// Hand the slot coordinates (and any existing occupants) to the caller
    /// to start creating an appointment. In week-mode `bucket` may be
    /// non-empty and the caller decides whether to disambiguate first;
    /// `doctor` is bound only in day-mode.
    RequestCreate {
        date: NaiveDate,
        slot: TimeSlot,
        bucket: Vec<Appointment>,
        doctor: Option<Doctor>,
    },
    /// Present the cell's occupants for user selection.
    OpenDisambiguation { bucket: Vec<Appointment> },
}
