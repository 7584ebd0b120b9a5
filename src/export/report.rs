//! Timesheet report: header, one row per entry and a trailing total.

use crate::core::calculator::duration::total_duration;
use crate::errors::{AppError, AppResult};
use crate::export::document::{Column, DocumentWriter, TableRow};
use crate::export::pdf::PdfManager;
use crate::models::TimeEntry;
use crate::utils::date::report_date;
use crate::utils::format_hhmm;

pub const REPORT_COLUMNS: [Column; 7] = [
    Column {
        header: "Date",
        weight: 25.0,
        wrap: false,
    },
    Column {
        header: "Start",
        weight: 17.0,
        wrap: false,
    },
    Column {
        header: "End",
        weight: 17.0,
        wrap: false,
    },
    Column {
        header: "Duration",
        weight: 22.0,
        wrap: false,
    },
    Column {
        header: "Category",
        weight: 30.0,
        wrap: false,
    },
    Column {
        header: "Project",
        weight: 32.0,
        wrap: false,
    },
    Column {
        header: "Note",
        weight: 47.0,
        wrap: true,
    },
];

pub(crate) fn entry_row(e: &TimeEntry) -> TableRow {
    TableRow::body(vec![
        report_date(e.date),
        e.start_str(),
        e.end_str(),
        e.duration_str(),
        e.category.clone(),
        e.project.clone(),
        e.note_str().to_string(),
    ])
}

pub(crate) fn total_row(entries: &[TimeEntry]) -> TableRow {
    TableRow::total(vec![
        "Total".to_string(),
        String::new(),
        String::new(),
        format_hhmm(total_duration(entries)),
        String::new(),
        String::new(),
        String::new(),
    ])
}

fn push_row<W: DocumentWriter>(doc: &mut W, row: &TableRow) -> AppResult<()> {
    if doc.add_row(row) {
        return Ok(());
    }
    // page full: retry once on a fresh page
    doc.add_page();
    if doc.add_row(row) {
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "row '{}' does not fit on a page",
            row.cells.first().map(String::as_str).unwrap_or("")
        )))
    }
}

/// Drive `doc` through the report for `entries`, already filtered and sorted.
pub fn render_report<W: DocumentWriter>(doc: &mut W, entries: &[TimeEntry]) -> AppResult<()> {
    if entries.is_empty() {
        return Err(AppError::EmptyReport("no entries to report".to_string()));
    }

    doc.add_page();
    for e in entries {
        push_row(doc, &entry_row(e))?;
    }
    push_row(doc, &total_row(entries))
}

/// Build the PDF report and return its bytes.
pub fn build_report(entries: &[TimeEntry], title: &str) -> AppResult<Vec<u8>> {
    let mut pdf = PdfManager::new(title, &REPORT_COLUMNS);
    render_report(&mut pdf, entries)?;
    Ok(pdf.finalize())
}
