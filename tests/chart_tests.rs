use rworklog::core::chart::{ChartLogic, ChartOutcome, category_breakdown, category_shares};
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::entry;

fn chart_path(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_rworklog_chart.png", name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn test_breakdown_sums_per_category_in_first_seen_order() {
    let entries = vec![
        entry(1, "2024-02-12", "09:00", "12:00", "Dev"),
        entry(2, "2024-02-12", "13:00", "15:30", "Meetings"),
        entry(3, "2024-02-13", "09:00", "12:00", "Dev"),
    ];

    let breakdown = category_breakdown(&entries);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].category, "Dev");
    assert!((breakdown[0].hours - 6.0).abs() < 1e-9);
    assert_eq!(breakdown[1].category, "Meetings");
    assert!((breakdown[1].hours - 2.5).abs() < 1e-9);
}

#[test]
fn test_shares_add_up_to_hundred() {
    let entries = vec![
        entry(1, "2024-02-12", "09:00", "12:00", "Dev"),
        entry(2, "2024-02-14", "13:00", "15:30", "Meetings"),
    ];

    let shares = category_shares(&category_breakdown(&entries));
    assert_eq!(shares.len(), 2);

    let total: f64 = shares.iter().map(|s| s.percent).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert_eq!(format!("{:.1}", shares[0].percent), "54.5");
    assert_eq!(format!("{:.1}", shares[1].percent), "45.5");
}

#[test]
fn test_no_shares_without_worked_time() {
    assert!(category_shares(&category_breakdown(&[])).is_empty());

    let zero = vec![entry(1, "2024-02-12", "09:00", "09:00", "Dev")];
    assert!(category_shares(&category_breakdown(&zero)).is_empty());
}

#[test]
fn test_render_pie_png() {
    let path = chart_path("pie");
    let entries = vec![
        entry(1, "2024-02-12", "09:00", "12:00", "Dev"),
        entry(2, "2024-02-14", "13:00", "15:30", "Meetings"),
        entry(3, "2024-02-15", "08:00", "09:00", "Support"),
    ];

    let outcome = ChartLogic::render(&entries, &path, None).expect("render");
    assert!(matches!(outcome, ChartOutcome::Pie { slices: 3, .. }));

    let img = image::open(&path).expect("valid png");
    assert_eq!((img.width(), img.height()), (800, 500));
}

#[test]
fn test_render_placeholder_replaces_previous_chart() {
    let path = chart_path("placeholder");
    let entries = vec![entry(1, "2024-02-12", "09:00", "12:00", "Dev")];

    ChartLogic::render(&entries, &path, None).expect("first render");
    let outcome = ChartLogic::render(&[], &path, None).expect("second render");
    assert!(matches!(outcome, ChartOutcome::Placeholder { .. }));

    let img = image::open(&path).expect("valid png").to_rgb8();
    // the pie centre was coloured; now it is background
    assert_eq!(img.get_pixel(300, 270).0, [0x1a, 0x1a, 0x2e]);
}

#[test]
fn test_render_creates_parent_directory() {
    let mut dir = env::temp_dir();
    dir.push("rworklog_chart_nested");
    fs::remove_dir_all(&dir).ok();
    let path = dir.join("sub").join("chart.png");

    ChartLogic::render(&[], &path, None).expect("render");
    assert!(path.exists());
}

#[test]
fn test_render_zero_duration_entries_without_pie() {
    let path = chart_path("zero_duration");
    let entries = vec![
        entry(1, "2024-02-12", "09:00", "09:00", "Dev"),
        entry(2, "2024-02-13", "14:00", "14:00", "Meetings"),
    ];

    let outcome = ChartLogic::render(&entries, &path, None).expect("render");
    assert!(matches!(outcome, ChartOutcome::NoWorkedTime { .. }));

    let empty = ChartLogic::render(&[], &path, None).expect("render");
    assert!(matches!(empty, ChartOutcome::Placeholder { .. }));
    assert_ne!(outcome, empty);
}
