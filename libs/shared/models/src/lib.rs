pub mod appointment;
pub mod doctor;
pub mod slot;

pub use appointment::{Appointment, AppointmentStatus};
pub use doctor::Doctor;
pub use slot::{TimeSlot, TimeSlotError};
