// src/export/model.rs

use crate::models::TimeEntry;
use serde::Serialize;

/// Flat entry shape for CSV / JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub category: String,
    pub project: String,
    pub note: String,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            start_time: e.start_str(),
            end_time: e.end_str(),
            duration: e.duration_str(),
            category: e.category.clone(),
            project: e.project.clone(),
            note: e.note_str().to_string(),
        }
    }
}

pub(crate) fn entries_to_export(entries: &[TimeEntry]) -> Vec<EntryExport> {
    entries.iter().map(EntryExport::from).collect()
}
