//! Temporal validation of proposed start instants.
//!
//! Creation and reschedule operations must not land on a day that has
//! already passed. The comparison truncates both sides to their calendar
//! date, so any time today is still schedulable regardless of the clock.

use chrono::{DateTime, Utc};

/// True when `candidate` falls on a day strictly before today.
pub fn is_past_date(candidate: DateTime<Utc>) -> bool {
    is_before_day(candidate, Utc::now())
}

/// Day-granularity comparison against an explicit reference instant.
pub fn is_before_day(candidate: DateTime<Utc>, reference: DateTime<Utc>) -> bool {
    candidate.date_naive() < reference.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn yesterday_is_past() {
        assert!(is_past_date(Utc::now() - Duration::days(1)));
    }

    #[test]
    fn tomorrow_is_not_past() {
        assert!(!is_past_date(Utc::now() + Duration::days(1)));
    }

    #[test]
    fn same_day_is_allowed_regardless_of_clock_time() {
        let reference = Utc.with_ymd_and_hms(2025, 6, 15, 14, 30, 0).unwrap();
        let earlier_same_day = Utc.with_ymd_and_hms(2025, 6, 15, 0, 5, 0).unwrap();
        assert!(!is_before_day(earlier_same_day, reference));
    }

    #[test]
    fn previous_day_late_evening_is_rejected() {
        let reference = Utc.with_ymd_and_hms(2025, 6, 15, 0, 1, 0).unwrap();
        let last_night = Utc.with_ymd_and_hms(2025, 6, 14, 23, 59, 0).unwrap();
        assert!(is_before_day(last_night, reference));
    }
}
