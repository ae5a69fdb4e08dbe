//! Calendar and week model
//!
//! Week boundaries are local midnights of the configured week-start day.
//! Every function reads the calendar day in the zone carried by its
//! `DateTime` argument; callers that care about cross-zone consistency must
//! normalise instants before handing them in.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::WeekStart;

/// Step used to walk past a midnight that a DST transition skipped
const GAP_PROBE_MINUTES: i64 = 15;

/// The most recent `week_start` day on or before `date`
pub fn align_date(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let today = date.weekday().num_days_from_monday();
    let first = week_start.weekday().num_days_from_monday();
    let back = (today + 7 - first) % 7;
    date - Duration::days(i64::from(back))
}

/// Midnight at the start of `date` in `tz`
///
/// Ambiguous midnights (clocks turned back) resolve to the earlier
/// instant. Midnights that do not exist (clocks jumped forward over them)
/// resolve to the first local time that does.
pub fn local_midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    if let Some(resolved) = tz.from_local_datetime(&midnight).earliest() {
        return resolved;
    }

    let mut probe = midnight;
    for _ in 0..(24 * 60 / GAP_PROBE_MINUTES) {
        probe += Duration::minutes(GAP_PROBE_MINUTES);
        if let Some(resolved) = tz.from_local_datetime(&probe).earliest() {
            return resolved;
        }
    }

    tz.from_utc_datetime(&midnight)
}

/// Local midnight of the most recent `week_start` day on or before the
/// calendar date of `instant`
///
/// An instant that already falls on `week_start` maps to that same day's
/// midnight.
pub fn start_of_week_containing<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    week_start: WeekStart,
) -> DateTime<Tz> {
    let aligned = align_date(instant.date_naive(), week_start);
    local_midnight(aligned, &instant.timezone())
}

/// Number of aligned weeks from `start` through `end`, inclusive
///
/// Both instants are snapped to their week start in the zone of `end`;
/// the result is `floor((E - S) / 7 days) + 1`. Two instants in the same
/// week give 1. When `end` lies in an earlier week than `start` the count
/// is zero or negative and is returned as is.
pub fn week_count<S: TimeZone, E: TimeZone>(
    start: &DateTime<S>,
    end: &DateTime<E>,
    week_start: WeekStart,
) -> i64 {
    let zone = end.timezone();
    let start_date = align_date(start.with_timezone(&zone).date_naive(), week_start);
    let end_date = align_date(end.date_naive(), week_start);
    (end_date - start_date).num_days().div_euclid(7) + 1
}

/// Week start containing `instant`, expressed in UTC
pub fn week_start_utc<Tz: TimeZone>(instant: &DateTime<Tz>, week_start: WeekStart) -> DateTime<Utc> {
    start_of_week_containing(instant, week_start).with_timezone(&Utc)
}
