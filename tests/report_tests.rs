use rworklog::errors::AppError;
use rworklog::export::report::REPORT_COLUMNS;
use rworklog::export::{DocumentWriter, RowKind, TableRow, build_report, render_report};

mod common;
use common::entry;

/// In-memory document that accepts a fixed number of rows per page.
struct Recorder {
    rows_per_page: usize,
    pages: Vec<Vec<TableRow>>,
}

impl Recorder {
    fn new(rows_per_page: usize) -> Self {
        Self {
            rows_per_page,
            pages: Vec::new(),
        }
    }
}

impl DocumentWriter for Recorder {
    fn add_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn add_row(&mut self, row: &TableRow) -> bool {
        let limit = self.rows_per_page;
        match self.pages.last_mut() {
            Some(page) if page.len() < limit => {
                page.push(row.clone());
                true
            }
            _ => false,
        }
    }

    fn finalize(self) -> Vec<u8> {
        Vec::new()
    }
}

fn sample() -> Vec<rworklog::models::TimeEntry> {
    vec![
        entry(1, "2024-02-12", "09:00", "12:00", "Dev"),
        entry(2, "2024-02-14", "13:00", "15:30", "Meetings"),
    ]
}

#[test]
fn test_report_rows_and_total() {
    let mut doc = Recorder::new(50);
    render_report(&mut doc, &sample()).expect("render");

    assert_eq!(doc.pages.len(), 1);
    let rows = &doc.pages[0];
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].kind, RowKind::Body);
    assert_eq!(rows[0].cells[0], "12.02.2024");
    assert_eq!(rows[0].cells[3], "03:00");
    assert_eq!(rows[1].cells[4], "Meetings");

    let total = &rows[2];
    assert_eq!(total.kind, RowKind::Total);
    assert_eq!(total.cells[0], "Total");
    assert_eq!(total.cells[3], "05:30");
    assert_eq!(total.cells.len(), REPORT_COLUMNS.len());
}

#[test]
fn test_report_breaks_pages() {
    let entries: Vec<_> = (0..5)
        .map(|i| entry(i, "2024-02-12", "09:00", "10:00", "Dev"))
        .collect();

    let mut doc = Recorder::new(2);
    render_report(&mut doc, &entries).expect("render");

    // 5 entries + total, two rows per page
    assert_eq!(doc.pages.len(), 3);
    assert!(doc.pages.iter().all(|p| p.len() == 2));
    let last = doc.pages.last().and_then(|p| p.last()).expect("total row");
    assert_eq!(last.kind, RowKind::Total);
    assert_eq!(last.cells[3], "05:00");
}

#[test]
fn test_report_row_that_never_fits_is_an_error() {
    let mut doc = Recorder::new(0);
    let err = render_report(&mut doc, &sample()).unwrap_err();
    assert!(matches!(err, AppError::Export(_)));
}

#[test]
fn test_empty_report_is_rejected() {
    let mut doc = Recorder::new(10);
    let err = render_report(&mut doc, &[]).unwrap_err();
    assert!(matches!(err, AppError::EmptyReport(_)));
    assert!(doc.pages.is_empty());

    assert!(matches!(
        build_report(&[], "Time report").unwrap_err(),
        AppError::EmptyReport(_)
    ));
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_pdf_report_bytes() {
    let bytes = build_report(&sample(), "Time report 12.02.2024 - 18.02.2024").expect("pdf");

    assert!(bytes.starts_with(b"%PDF"));
    assert!(contains(&bytes, b"05:30"));
    assert!(contains(&bytes, b"Meetings"));
    assert!(contains(&bytes, b"Time report 12.02.2024 - 18.02.2024"));
}

#[test]
fn test_pdf_report_long_list_spans_pages() {
    let mut entries = Vec::new();
    for i in 0..120 {
        let mut e = entry(i, "2024-02-12", "09:00", "09:30", "Dev");
        e.note = Some("A fairly long note that has to be wrapped over several lines".repeat(2));
        entries.push(e);
    }

    let bytes = build_report(&entries, "Time report").expect("pdf");
    assert!(contains(&bytes, b"Page 2"));
    // 120 x 30 minutes
    assert!(contains(&bytes, b"60:00"));
}
