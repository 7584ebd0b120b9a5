// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::EntryExport;

/// JSON, pretty-printed.
pub(crate) fn to_json(entries: &[EntryExport]) -> AppResult<Vec<u8>> {
    serde_json::to_vec_pretty(entries)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}

/// CSV with the header row derived from the struct fields.
pub(crate) fn to_csv(entries: &[EntryExport]) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for item in entries {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}
