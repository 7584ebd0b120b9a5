#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rust_xlsxwriter::Workbook;
use rworklog::models::TimeEntry;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a throwaway directory so the
/// default chart and config paths never touch the real user profile.
pub fn rwl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rworklog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rworklog");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_entry(db_path: &str, date: &str, start: &str, end: &str, category: &str, project: &str) {
    rwl()
        .args([
            "--db", db_path, "add", date, start, end, "-c", category, "-p", project,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset: 5:30 of work in the week of 2024-02-12.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_entry(db_path, "2024-02-12", "09:00", "12:00", "Dev", "Alpha");
    add_entry(db_path, "2024-02-14", "13:00", "15:30", "Meetings", "Alpha");
    // different month, outside the week
    add_entry(db_path, "2024-03-01", "08:00", "09:00", "Dev", "Beta");
}

pub fn entry(id: i64, date: &str, start: &str, end: &str, category: &str) -> TimeEntry {
    TimeEntry {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
        start_time: NaiveTime::parse_from_str(start, "%H:%M").expect("start"),
        end_time: NaiveTime::parse_from_str(end, "%H:%M").expect("end"),
        category: category.to_string(),
        project: "Alpha".to_string(),
        note: None,
    }
}

/// Glossary workbook laid out like the real one: title block in the first
/// 13 rows, terms in column D and explanations in column H below it.
pub fn glossary_fixture(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_glossary.xlsx", name));
    fs::remove_file(&path).ok();

    let rows: [(&str, &str); 6] = [
        ("API", "Application Programming Interface"),
        ("Apfel", ""),
        ("Backlog", "Ordered list of pending work"),
        ("Sprint", "Fixed-length iteration"),
        ("Sprint", "Duplicate row"),
        ("Spike", "Time-boxed investigation"),
    ];

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Glossary").expect("title");
    sheet.write_string(2, 0, "Maintained by the team").expect("meta");
    // a header-looking cell inside the skipped block
    sheet.write_string(12, 3, "Term").expect("header");

    for (i, (term, explanation)) in rows.iter().enumerate() {
        let row = 13 + i as u32;
        sheet.write_string(row, 3, *term).expect("term");
        if !explanation.is_empty() {
            sheet.write_string(row, 7, *explanation).expect("explanation");
        }
    }

    workbook.save(&path).expect("save workbook");
    path
}
