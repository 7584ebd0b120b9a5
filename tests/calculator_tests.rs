use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rworklog::core::calculator::duration::{entry_duration, hours, total_duration};
use rworklog::core::filter::period_range;
use rworklog::models::{DateRange, Period};
use rworklog::utils::format_hhmm;

mod common;
use common::entry;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("time")
}

#[test]
fn test_duration_same_day() {
    let dur = entry_duration(d("2024-02-15"), t("09:15"), t("17:45"));
    assert_eq!(dur, TimeDelta::minutes(8 * 60 + 30));
    assert_eq!(format_hhmm(dur), "08:30");
}

#[test]
fn test_duration_crosses_midnight() {
    let dur = entry_duration(d("2024-02-15"), t("22:30"), t("01:15"));
    assert_eq!(format_hhmm(dur), "02:45");
}

#[test]
fn test_duration_zero_length() {
    let dur = entry_duration(d("2024-02-15"), t("10:00"), t("10:00"));
    assert_eq!(dur, TimeDelta::zero());
    assert_eq!(format_hhmm(dur), "00:00");
}

#[test]
fn test_total_duration_and_hours() {
    let entries = vec![
        entry(1, "2024-02-12", "09:00", "12:00", "Dev"),
        entry(2, "2024-02-14", "13:00", "15:30", "Meetings"),
    ];

    let total = total_duration(&entries);
    assert_eq!(format_hhmm(total), "05:30");
    assert!((hours(total) - 5.5).abs() < 1e-9);
    assert_eq!(total_duration(&[]), TimeDelta::zero());
}

#[test]
fn test_format_hhmm_does_not_wrap_days() {
    assert_eq!(format_hhmm(TimeDelta::minutes(41 * 60 + 15)), "41:15");
}

#[test]
fn test_period_day() {
    let range = period_range(Period::Day, d("2024-02-15")).expect("range");
    assert_eq!(
        range,
        DateRange {
            start: d("2024-02-15"),
            end: d("2024-02-15")
        }
    );
}

#[test]
fn test_period_week_starts_monday() {
    // 2024-02-15 is a Thursday
    let range = period_range(Period::Week, d("2024-02-15")).expect("range");
    assert_eq!(range.start, d("2024-02-12"));
    assert_eq!(range.end, d("2024-02-18"));

    // a Sunday belongs to the week that started six days before
    let range = period_range(Period::Week, d("2024-02-18")).expect("range");
    assert_eq!(range.start, d("2024-02-12"));

    // a Monday starts its own week
    let range = period_range(Period::Week, d("2024-02-19")).expect("range");
    assert_eq!(range.start, d("2024-02-19"));
    assert_eq!(range.end, d("2024-02-25"));
}

#[test]
fn test_period_week_across_year_boundary() {
    let range = period_range(Period::Week, d("2025-01-01")).expect("range");
    assert_eq!(range.start, d("2024-12-30"));
    assert_eq!(range.end, d("2025-01-05"));
}

#[test]
fn test_period_month_leap_year() {
    let range = period_range(Period::Month, d("2024-02-15")).expect("range");
    assert_eq!(range.start, d("2024-02-01"));
    assert_eq!(range.end, d("2024-02-29"));

    let range = period_range(Period::Month, d("2023-02-10")).expect("range");
    assert_eq!(range.end, d("2023-02-28"));
}

#[test]
fn test_period_month_lengths() {
    assert_eq!(
        period_range(Period::Month, d("2024-12-31")).expect("range").end,
        d("2024-12-31")
    );
    assert_eq!(
        period_range(Period::Month, d("2024-04-30")).expect("range").end,
        d("2024-04-30")
    );
    assert_eq!(
        period_range(Period::Month, d("2024-01-01")).expect("range").end,
        d("2024-01-31")
    );
}
