// libs/shared/utils/src/test_utils.rs
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use shared_models::{Appointment, AppointmentStatus, Doctor};

/// Install a fmt subscriber honoring RUST_LOG for test runs. Safe to call
/// from every test; repeat installs are ignored.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builder for appointment fixtures. Panics on malformed date/time literals,
/// which is the point in a test helper.
pub struct AppointmentFixture {
    date: NaiveDate,
    time: NaiveTime,
    doctor_id: Option<Uuid>,
    status: AppointmentStatus,
    patient_name: Option<String>,
}

impl AppointmentFixture {
    pub fn on(date: &str, time: &str) -> Self {
        Self {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            doctor_id: None,
            status: AppointmentStatus::Scheduled,
            patient_name: None,
        }
    }

    pub fn with_doctor(mut self, doctor_id: Uuid) -> Self {
        self.doctor_id = Some(doctor_id);
        self
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_patient(mut self, name: &str) -> Self {
        self.patient_name = Some(name.to_string());
        self
    }

    pub fn build(self) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            date: self.date,
            time: self.time,
            doctor_id: self.doctor_id,
            status: self.status,
            patient_name: self.patient_name,
            notes: None,
        }
    }
}

pub fn test_doctor(first_name: &str, last_name: &str) -> Doctor {
    Doctor {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        specialty: None,
    }
}
