// libs/shared/utils/src/time.rs
//
// Calendar highlight predicates. "Now" is always an explicit parameter so the
// grid stays a pure function of its inputs and tests can pin the instant.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

use shared_models::TimeSlot;

/// True iff `date` falls on the same calendar day as `at`.
pub fn is_today(date: NaiveDate, at: DateTime<Utc>) -> bool {
    date == at.date_naive()
}

/// True iff the slot label's hour equals the wall-clock hour of `at`.
/// Used for highlighting only, never for bucketing.
pub fn is_current_hour(slot: &TimeSlot, at: DateTime<Utc>) -> bool {
    slot.hour() == Some(at.hour())
}

/// True iff `date` is in the same month (and year) as `reference`.
pub fn is_same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.month() == reference.month() && date.year() == reference.year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap()
    }

    #[test]
    fn today_matches_exact_calendar_day() {
        let now = at(2024, 5, 1, 9);
        assert!(is_today(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), now));
        assert!(!is_today(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), now));
        assert!(!is_today(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(), now));
    }

    #[test]
    fn current_hour_ignores_minutes() {
        let now = at(2024, 5, 1, 9);
        assert!(is_current_hour(&TimeSlot::new("09:00"), now));
        assert!(is_current_hour(&TimeSlot::new("09:45"), now));
        assert!(!is_current_hour(&TimeSlot::new("10:00"), now));
    }

    #[test]
    fn malformed_slot_is_never_current() {
        let now = at(2024, 5, 1, 9);
        assert!(!is_current_hour(&TimeSlot::new("morning"), now));
    }

    #[test]
    fn same_month_requires_same_year() {
        let reference = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        assert!(is_same_month(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), reference));
        assert!(!is_same_month(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(), reference));
        assert!(!is_same_month(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), reference));
    }
}
