//! Daily trigger for the pipeline.
//!
//! The mailer stays resident and fires once per day at a fixed local
//! wall-clock time. The trigger is at-least-once in spirit: a duplicate
//! digest is tolerable, a missed one is not corrected. There is no catch-up
//! for runs missed while the process was down, no cancellation of a run in
//! flight, and never more than one run in flight by construction.
//!
//! The host's local clock decides what "daily" means; deployments pin `TZ`
//! in the unit environment to pick the zone.

use chrono::{Days, NaiveDateTime, NaiveTime};
use std::time::Duration;

/// The next strictly-future occurrence of `at` on the local calendar.
///
/// If today's occurrence is still ahead of `now`, that is the answer;
/// otherwise tomorrow's. `now == occurrence` schedules tomorrow, so a run
/// finishing exactly on the boundary cannot double-fire.
pub fn next_run(now: NaiveDateTime, at: NaiveTime) -> NaiveDateTime {
    let today = now.date().and_time(at);
    if today > now {
        today
    } else {
        today
            .checked_add_days(Days::new(1))
            .expect("calendar does not overflow")
    }
}

/// How long to sleep from `now` until `next`.
pub fn sleep_duration(now: NaiveDateTime, next: NaiveDateTime) -> Duration {
    (next - now).to_std().unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn on(date: (i32, u32, u32), time: (u32, u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, time.2)
            .unwrap()
    }

    #[test]
    fn test_next_run_later_today() {
        let now = on((2025, 5, 6), (4, 0, 0));
        assert_eq!(next_run(now, at(6, 30)), on((2025, 5, 6), (6, 30, 0)));
    }

    #[test]
    fn test_next_run_already_passed_today() {
        let now = on((2025, 5, 6), (7, 0, 0));
        assert_eq!(next_run(now, at(6, 30)), on((2025, 5, 7), (6, 30, 0)));
    }

    #[test]
    fn test_next_run_exactly_on_the_boundary_schedules_tomorrow() {
        let now = on((2025, 5, 6), (6, 30, 0));
        assert_eq!(next_run(now, at(6, 30)), on((2025, 5, 7), (6, 30, 0)));
    }

    #[test]
    fn test_next_run_rolls_over_month_and_year() {
        let now = on((2025, 12, 31), (23, 59, 0));
        assert_eq!(next_run(now, at(0, 0)), on((2026, 1, 1), (0, 0, 0)));
    }

    #[test]
    fn test_sleep_duration() {
        let now = on((2025, 5, 6), (23, 59, 30));
        let next = on((2025, 5, 7), (0, 0, 0));
        assert_eq!(sleep_duration(now, next), Duration::from_secs(30));
    }

    #[test]
    fn test_sleep_duration_never_negative() {
        let now = on((2025, 5, 7), (1, 0, 0));
        let next = on((2025, 5, 7), (0, 0, 0));
        assert_eq!(sleep_duration(now, next), Duration::ZERO);
    }
}
