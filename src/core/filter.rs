//! Report filter: date range covered by a period around an anchor date.

use crate::errors::{AppError, AppResult};
use crate::models::{DateRange, Period};
use chrono::{Datelike, Days, NaiveDate};

/// Inclusive range for `period` containing `anchor`.
///
/// - day: the anchor itself
/// - week: Monday to Sunday of the anchor's week
/// - month: first to last day of the anchor's month
pub fn period_range(period: Period, anchor: NaiveDate) -> AppResult<DateRange> {
    match period {
        Period::Day => Ok(DateRange {
            start: anchor,
            end: anchor,
        }),
        Period::Week => {
            let offset = u64::from(anchor.weekday().num_days_from_monday());
            let start = anchor
                .checked_sub_days(Days::new(offset))
                .ok_or_else(|| out_of_range(anchor))?;
            let end = start
                .checked_add_days(Days::new(6))
                .ok_or_else(|| out_of_range(anchor))?;
            Ok(DateRange { start, end })
        }
        Period::Month => {
            let start = anchor.with_day(1).ok_or_else(|| out_of_range(anchor))?;
            Ok(DateRange {
                start,
                end: last_day_of_month(anchor)?,
            })
        }
    }
}

/// Day 28 exists in every month and +4 days always lands in the next one;
/// stepping back from that month's first day gives the last day of ours.
fn last_day_of_month(anchor: NaiveDate) -> AppResult<NaiveDate> {
    anchor
        .with_day(28)
        .and_then(|d| d.checked_add_days(Days::new(4)))
        .and_then(|d| d.with_day(1))
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| out_of_range(anchor))
}

fn out_of_range(anchor: NaiveDate) -> AppError {
    AppError::InvalidDate(format!("{anchor} is outside the supported calendar"))
}
