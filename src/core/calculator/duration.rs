//! Elapsed-time arithmetic for entries.

use crate::models::TimeEntry;
use chrono::{NaiveDate, NaiveTime, TimeDelta};

/// Time worked between `start` and `end` on `date`.
///
/// Both wall-clock times are anchored on `date`; an end before the start
/// means the interval crossed midnight, so the end moves to the next day.
/// The result is never negative.
pub fn entry_duration(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> TimeDelta {
    let start_dt = date.and_time(start);
    let mut end_dt = date.and_time(end);

    if end_dt < start_dt {
        end_dt += TimeDelta::days(1);
    }

    end_dt - start_dt
}

/// Sum of all entry durations.
pub fn total_duration(entries: &[TimeEntry]) -> TimeDelta {
    entries
        .iter()
        .fold(TimeDelta::zero(), |acc, e| acc + e.duration())
}

/// Duration as fractional hours.
pub fn hours(d: TimeDelta) -> f64 {
    d.num_seconds() as f64 / 3600.0
}
