//! SQLite-backed store for time entries.

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult, ValidationError};
use crate::models::{DateRange, NewEntry, TimeEntry};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

const SELECT_ENTRY: &str =
    "SELECT id, date, start_time, end_time, category, project, note FROM time_entries";

/// Owns the connection; opened once per process and passed to every operation.
pub struct EntryStore {
    conn: Connection,
}

impl EntryStore {
    /// Open (or create) the database at `path` and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Persist a validated entry and return it with its new id.
    pub fn add(&self, entry: &NewEntry) -> AppResult<TimeEntry> {
        self.conn.execute(
            "INSERT INTO time_entries (date, start_time, end_time, category, project, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.date.format("%Y-%m-%d").to_string(),
                entry.start_time.format("%H:%M").to_string(),
                entry.end_time.format("%H:%M").to_string(),
                entry.category,
                entry.project,
                entry.note,
            ],
        )?;

        Ok(TimeEntry {
            id: self.conn.last_insert_rowid(),
            date: entry.date,
            start_time: entry.start_time,
            end_time: entry.end_time,
            category: entry.category.clone(),
            project: entry.project.clone(),
            note: entry.note.clone(),
        })
    }

    /// All entries, newest first.
    pub fn list(&self) -> AppResult<Vec<TimeEntry>> {
        let sql = format!("{SELECT_ENTRY} ORDER BY date DESC, start_time DESC, id DESC");
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map([], map_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Entries dated within `range` (inclusive), oldest first.
    pub fn list_filtered(&self, range: &DateRange) -> AppResult<Vec<TimeEntry>> {
        let sql = format!(
            "{SELECT_ENTRY} WHERE date BETWEEN ?1 AND ?2
             ORDER BY date ASC, start_time ASC, id ASC"
        );
        let mut stmt = self.conn.prepare_cached(&sql)?;
        let rows = stmt.query_map(
            params![
                range.start.format("%Y-%m-%d").to_string(),
                range.end.format("%Y-%m-%d").to_string(),
            ],
            map_row,
        )?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn get(&self, id: i64) -> AppResult<TimeEntry> {
        let sql = format!("{SELECT_ENTRY} WHERE id = ?1");
        self.conn
            .query_row(&sql, [id], map_row)
            .optional()?
            .ok_or(AppError::EntryNotFound(id))
    }

    /// Remove one entry; a missing id leaves the store untouched.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM time_entries WHERE id = ?1", [id])?;

        if deleted == 0 {
            return Err(AppError::EntryNotFound(id));
        }
        Ok(())
    }

    pub fn count(&self) -> AppResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM time_entries", [], |row| row.get(0))?)
    }
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<TimeEntry> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(1, AppError::InvalidDate(date_str.clone())))?;

    let start_time = NaiveTime::parse_from_str(&start_str, "%H:%M").map_err(|_| {
        conversion_error(
            2,
            AppError::Validation(ValidationError::InvalidTime {
                field: "start_time",
                value: start_str.clone(),
            }),
        )
    })?;

    let end_time = NaiveTime::parse_from_str(&end_str, "%H:%M").map_err(|_| {
        conversion_error(
            3,
            AppError::Validation(ValidationError::InvalidTime {
                field: "end_time",
                value: end_str.clone(),
            }),
        )
    })?;

    Ok(TimeEntry {
        id: row.get("id")?,
        date,
        start_time,
        end_time,
        category: row.get("category")?,
        project: row.get("project")?,
        note: row.get("note")?,
    })
}
