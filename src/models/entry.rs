use crate::core::calculator::duration::entry_duration;
use crate::errors::ValidationError;
use crate::utils::{date, format_hhmm, time};
use chrono::{NaiveDate, NaiveTime, TimeDelta};

pub const MAX_CATEGORY_LEN: usize = 50;
pub const MAX_PROJECT_LEN: usize = 100;
pub const MAX_NOTE_LEN: usize = 300;

/// A stored work interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub id: i64,              // ⇔ time_entries.id
    pub date: NaiveDate,      // ⇔ time_entries.date (TEXT "YYYY-MM-DD")
    pub start_time: NaiveTime, // ⇔ time_entries.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,  // ⇔ time_entries.end_time (TEXT "HH:MM")
    pub category: String,
    pub project: String,
    pub note: Option<String>,
}

impl TimeEntry {
    /// Elapsed time, rolling over midnight when end < start.
    pub fn duration(&self) -> TimeDelta {
        entry_duration(self.date, self.start_time, self.end_time)
    }

    pub fn duration_str(&self) -> String {
        format_hhmm(self.duration())
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }

    pub fn note_str(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}

/// A validated entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub category: String,
    pub project: String,
    pub note: Option<String>,
}

/// Raw input as typed by the user, before validation.
#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub category: Option<String>,
    pub project: Option<String>,
    pub note: Option<String>,
}

/// Trimmed value of a field, `None` when absent or blank.
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn required<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    filled(value).ok_or(ValidationError::MissingField(field))
}

fn bounded(value: &str, field: &'static str, max: usize) -> Result<String, ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_string())
}

impl EntryForm {
    /// Check every field once and produce a typed entry.
    ///
    /// Required fields are checked before formats, so an empty form reports
    /// the first missing field rather than a parse error.
    pub fn validate(&self) -> Result<NewEntry, ValidationError> {
        let date_raw = required(&self.date, "date")?;
        let start_raw = required(&self.start_time, "start_time")?;
        let end_raw = required(&self.end_time, "end_time")?;
        let category = required(&self.category, "category")?;
        let project = required(&self.project, "project")?;

        let date = date::parse_date(date_raw)
            .ok_or_else(|| ValidationError::InvalidDate(date_raw.to_string()))?;
        let start_time =
            time::parse_time(start_raw).ok_or_else(|| ValidationError::InvalidTime {
                field: "start_time",
                value: start_raw.to_string(),
            })?;
        let end_time = time::parse_time(end_raw).ok_or_else(|| ValidationError::InvalidTime {
            field: "end_time",
            value: end_raw.to_string(),
        })?;

        let note = match filled(&self.note) {
            Some(n) => Some(bounded(n, "note", MAX_NOTE_LEN)?),
            None => None,
        };

        Ok(NewEntry {
            date,
            start_time,
            end_time,
            category: bounded(category, "category", MAX_CATEGORY_LEN)?,
            project: bounded(project, "project", MAX_PROJECT_LEN)?,
            note,
        })
    }
}
