//! Calendar math for exam scheduling: combining a date with a time-of-day,
//! countdown breakdowns, and day-granularity differences.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

/// Truncated day/hour/minute breakdown of a signed duration.
///
/// Each component carries the sign of the overall duration, so a target in
/// the past yields negative (or zero) components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBreakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

/// Countdown magnitudes with an explicit overdue flag, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub overdue: bool,
}

/// Builds one instant from the calendar date of `date` and the time-of-day
/// of `time`. Seconds and sub-seconds are zeroed.
///
/// Returns `None` when the composed fields do not form a valid instant;
/// callers fall back to `date` unmodified.
pub fn combine(date: DateTime<Utc>, time: DateTime<Utc>) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute(),
        0,
    )
    .single()
}

/// Breaks `to - from` into whole days, remaining whole hours and remaining
/// whole minutes, each truncated toward zero.
pub fn time_until(from: DateTime<Utc>, to: DateTime<Utc>) -> TimeBreakdown {
    let delta = to.signed_duration_since(from);
    TimeBreakdown {
        days: delta.num_days(),
        hours: delta.num_hours() % 24,
        minutes: delta.num_minutes() % 60,
    }
}

/// Whole calendar days between the start-of-day of `from` and of `to`.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    to.date_naive()
        .signed_duration_since(from.date_naive())
        .num_days()
}

/// Countdown from `now` to `target` as magnitudes plus an overdue flag.
///
/// `time_until` keeps raw signed components; this is the shape meant for
/// display, where a past-due exam shows positive numbers with an explicit
/// "overdue" marker instead of negatives.
pub fn countdown(now: DateTime<Utc>, target: DateTime<Utc>) -> Countdown {
    let breakdown = time_until(now, target);
    Countdown {
        days: breakdown.days.unsigned_abs(),
        hours: breakdown.hours.unsigned_abs(),
        minutes: breakdown.minutes.unsigned_abs(),
        overdue: target < now,
    }
}
