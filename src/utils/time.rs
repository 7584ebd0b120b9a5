//! Time utilities: HH:MM parsing.

use chrono::NaiveTime;

/// Parse a wall-clock time written as `HH:MM`.
///
/// Hours and minutes may be written with one digit (`9:05`); seconds are not
/// accepted.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}
