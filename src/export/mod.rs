// src/export/mod.rs

pub mod document;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub mod pdf;
pub mod report;

pub use document::{Column, DocumentWriter, RowKind, TableRow};
pub use logic::{ExportLogic, ExportOutcome, ExportRequest};
pub use model::EntryExport;
pub use report::{build_report, render_report};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
