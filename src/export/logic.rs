// src/export/logic.rs

use crate::core::filter::period_range;
use crate::db::EntryStore;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{to_csv, to_json};
use crate::export::model::entries_to_export;
use crate::export::report::build_report;
use crate::models::{DateRange, Period};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// What the user asked to export.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub period: Period,
    pub anchor: NaiveDate,
    /// Explicit output file (absolute); defaults to a name inside `reports_dir`.
    pub file: Option<PathBuf>,
    pub reports_dir: PathBuf,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written {
        path: PathBuf,
        entries: usize,
        range: DateRange,
    },
    /// Nothing recorded in the period; no file was written.
    NoData(DateRange),
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(store: &EntryStore, req: &ExportRequest) -> AppResult<ExportOutcome> {
        let range = period_range(req.period, req.anchor)?;
        let entries = store.list_filtered(&range)?;

        if entries.is_empty() {
            return Ok(ExportOutcome::NoData(range));
        }

        let path = match &req.file {
            Some(f) => {
                if !f.is_absolute() {
                    return Err(AppError::Export(format!(
                        "output file path must be absolute: {}",
                        f.display()
                    )));
                }
                f.clone()
            }
            None => req
                .reports_dir
                .join(default_file_name(req.format, req.period, req.anchor)),
        };

        ensure_writable(&path, req.force)?;

        let bytes = match req.format {
            ExportFormat::Pdf => build_report(&entries, &report_title(req.period, &range))?,
            ExportFormat::Csv => to_csv(&entries_to_export(&entries))?,
            ExportFormat::Json => to_json(&entries_to_export(&entries))?,
        };

        write_file(&path, &bytes)?;

        ttlog(
            store.conn(),
            "export",
            req.format.as_str(),
            &format!(
                "{} entries ({} {}) → {}",
                entries.len(),
                req.period,
                range,
                path.display()
            ),
        )?;

        Ok(ExportOutcome::Written {
            path,
            entries: entries.len(),
            range,
        })
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// File name encoding the period and the anchor date, e.g. `worklog_week_2024-02-15.pdf`.
pub fn default_file_name(format: ExportFormat, period: Period, anchor: NaiveDate) -> String {
    format!(
        "worklog_{}_{}.{}",
        period,
        anchor.format("%Y-%m-%d"),
        format.as_str()
    )
}

/// Title printed at the top of every report page.
pub fn report_title(period: Period, range: &DateRange) -> String {
    match period {
        Period::Day => format!("Time report for {}", range.start.format("%d.%m.%Y")),
        Period::Week | Period::Month => format!(
            "Time report {} - {}",
            range.start.format("%d.%m.%Y"),
            range.end.format("%d.%m.%Y")
        ),
    }
}
