// libs/schedule-grid-cell/tests/resolver_test.rs
//
// Bucketing semantics: exact-date match, hour-only time match, doctor
// dimension per viewing mode, and silent degradation on malformed input.

use chrono::NaiveDate;

use schedule_grid_cell::models::ViewMode;
use schedule_grid_cell::services::resolver::{resolve, slot_matches};
use shared_models::{Doctor, TimeSlot};
use shared_utils::test_utils::{test_doctor, AppointmentFixture};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn day_mode_matches_date_hour_and_doctor() {
    let doctor = test_doctor("Jane", "Smith");
    let appointment = AppointmentFixture::on("2024-05-01", "09:15")
        .with_doctor(doctor.id)
        .build();
    let doctors = vec![doctor];

    let bucket = resolve(
        std::slice::from_ref(&appointment),
        date("2024-05-01"),
        &TimeSlot::new("09:00"),
        Some(0),
        ViewMode::Day,
        &doctors,
    );

    assert_eq!(bucket, vec![appointment]);
}

#[test]
fn minutes_never_affect_bucketing() {
    let doctor = test_doctor("Jane", "Smith");
    let early = AppointmentFixture::on("2024-05-01", "09:05")
        .with_doctor(doctor.id)
        .build();
    let late = AppointmentFixture::on("2024-05-01", "09:55")
        .with_doctor(doctor.id)
        .build();
    let doctors = vec![doctor];

    let bucket = resolve(
        &[early.clone(), late.clone()],
        date("2024-05-01"),
        &TimeSlot::new("09:00"),
        Some(0),
        ViewMode::Day,
        &doctors,
    );

    assert_eq!(bucket, vec![early, late]);
}

#[test]
fn different_hour_does_not_match() {
    let doctor = test_doctor("Jane", "Smith");
    let appointment = AppointmentFixture::on("2024-05-01", "09:15")
        .with_doctor(doctor.id)
        .build();
    let doctors = vec![doctor];

    let bucket = resolve(
        &[appointment],
        date("2024-05-01"),
        &TimeSlot::new("10:00"),
        Some(0),
        ViewMode::Day,
        &doctors,
    );

    assert!(bucket.is_empty());
}

#[test]
fn different_date_does_not_match() {
    let doctor = test_doctor("Jane", "Smith");
    let appointment = AppointmentFixture::on("2024-05-01", "09:15")
        .with_doctor(doctor.id)
        .build();
    let doctors = vec![doctor];

    assert!(!slot_matches(
        &appointment,
        date("2024-05-02"),
        &TimeSlot::new("09:00"),
        Some(0),
        ViewMode::Day,
        &doctors,
    ));
}

#[test]
fn resolve_preserves_input_order_and_is_idempotent() {
    let doctor = test_doctor("Jane", "Smith");
    let appointments: Vec<_> = ["09:40", "09:05", "09:20"]
        .iter()
        .map(|time| {
            AppointmentFixture::on("2024-05-01", time)
                .with_doctor(doctor.id)
                .build()
        })
        .collect();
    let doctors = vec![doctor];

    let first = resolve(
        &appointments,
        date("2024-05-01"),
        &TimeSlot::new("09:00"),
        Some(0),
        ViewMode::Day,
        &doctors,
    );
    let second = resolve(
        &appointments,
        date("2024-05-01"),
        &TimeSlot::new("09:00"),
        Some(0),
        ViewMode::Day,
        &doctors,
    );

    // Stable filter: input order survives, repeat calls agree exactly.
    assert_eq!(first, appointments);
    assert_eq!(first, second);
}

#[test]
fn week_mode_collapses_the_doctor_dimension() {
    let smith = test_doctor("Jane", "Smith");
    let jones = test_doctor("Sam", "Jones");
    let with_smith = AppointmentFixture::on("2024-05-01", "09:00")
        .with_doctor(smith.id)
        .build();
    let with_jones = AppointmentFixture::on("2024-05-01", "09:30")
        .with_doctor(jones.id)
        .build();
    let doctors = vec![smith, jones];

    let bucket = resolve(
        &[with_smith.clone(), with_jones.clone()],
        date("2024-05-01"),
        &TimeSlot::new("09:00"),
        None,
        ViewMode::Week,
        &doctors,
    );

    assert_eq!(bucket, vec![with_smith, with_jones]);
}

#[test]
fn week_mode_ignores_a_supplied_column() {
    let smith = test_doctor("Jane", "Smith");
    let jones = test_doctor("Sam", "Jones");
    let with_jones = AppointmentFixture::on("2024-05-01", "09:00")
        .with_doctor(jones.id)
        .build();
    let doctors = vec![smith, jones];

    // Column 0 is Smith, but week-mode matches regardless.
    let bucket = resolve(
        &[with_jones.clone()],
        date("2024-05-01"),
        &TimeSlot::new("09:00"),
        Some(0),
        ViewMode::Week,
        &doctors,
    );

    assert_eq!(bucket, vec![with_jones]);
}

#[test]
fn out_of_range_column_yields_empty_bucket() {
    let doctor = test_doctor("Jane", "Smith");
    let appointment = AppointmentFixture::on("2024-05-01", "09:15")
        .with_doctor(doctor.id)
        .build();
    let doctors = vec![doctor];

    let bucket = resolve(
        &[appointment],
        date("2024-05-01"),
        &TimeSlot::new("09:00"),
        Some(5),
        ViewMode::Day,
        &doctors,
    );

    assert!(bucket.is_empty());
}

#[test]
fn day_mode_without_a_column_matches_nothing() {
    let doctor = test_doctor("Jane", "Smith");
    let appointment = AppointmentFixture::on("2024-05-01", "09:15")
        .with_doctor(doctor.id)
        .build();
    let doctors = vec![doctor];

    let bucket = resolve(
        &[appointment],
        date("2024-05-01"),
        &TimeSlot::new("09:00"),
        None,
        ViewMode::Day,
        &doctors,
    );

    assert!(bucket.is_empty());
}

#[test]
fn appointment_without_doctor_never_matches_a_day_column() {
    let doctor = test_doctor("Jane", "Smith");
    let unassigned = AppointmentFixture::on("2024-05-01", "09:15").build();
    let doctors = vec![doctor];

    assert!(!slot_matches(
        &unassigned,
        date("2024-05-01"),
        &TimeSlot::new("09:00"),
        Some(0),
        ViewMode::Day,
        &doctors,
    ));
}

#[test]
fn malformed_slot_label_matches_nothing() {
    let doctor = test_doctor("Jane", "Smith");
    let appointment = AppointmentFixture::on("2024-05-01", "09:15")
        .with_doctor(doctor.id)
        .build();
    let doctors = vec![doctor];

    for label in ["morning", "", "9h"] {
        let bucket = resolve(
            std::slice::from_ref(&appointment),
            date("2024-05-01"),
            &TimeSlot::new(label),
            Some(0),
            ViewMode::Day,
            &doctors,
        );
        assert!(bucket.is_empty(), "label {label:?} should match nothing");
    }
}

#[test]
fn empty_roster_in_week_mode_still_buckets() {
    let appointment = AppointmentFixture::on("2024-05-01", "09:15").build();
    let doctors: Vec<Doctor> = Vec::new();

    let bucket = resolve(
        std::slice::from_ref(&appointment),
        date("2024-05-01"),
        &TimeSlot::new("09:00"),
        None,
        ViewMode::Week,
        &doctors,
    );

    assert_eq!(bucket, vec![appointment]);
}
