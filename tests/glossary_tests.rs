use predicates::str::contains;
use rworklog::core::glossary::{Glossary, GlossaryLayout, Lookup, NO_EXPLANATION, NOT_FOUND};
use std::env;

mod common;
use common::{glossary_fixture, rwl};

fn glossary(name: &str, max: usize) -> Glossary {
    Glossary::new(glossary_fixture(name), GlossaryLayout::default(), max)
}

#[test]
fn test_lookup_is_case_insensitive_exact() {
    let g = glossary("lookup_exact", 10);

    assert_eq!(
        g.lookup("api"),
        Lookup::Explanation("Application Programming Interface".to_string())
    );
    assert_eq!(
        g.lookup("  BACKLOG "),
        Lookup::Explanation("Ordered list of pending work".to_string())
    );
    // a prefix is not an exact match
    assert_eq!(g.lookup("Back"), Lookup::NotFound);
}

#[test]
fn test_lookup_first_match_wins() {
    let g = glossary("lookup_first", 10);
    assert_eq!(
        g.lookup("sprint"),
        Lookup::Explanation("Fixed-length iteration".to_string())
    );
}

#[test]
fn test_lookup_blank_explanation_and_unknown_term() {
    let g = glossary("lookup_blank", 10);

    assert_eq!(g.lookup("Apfel"), Lookup::NoExplanation);
    assert_eq!(g.lookup("Apfel").to_string(), NO_EXPLANATION);
    assert_eq!(g.lookup("Kanban").to_string(), NOT_FOUND);
    assert_eq!(g.lookup(""), Lookup::NotFound);
}

#[test]
fn test_header_block_is_skipped() {
    let g = glossary("header_skipped", 10);
    // "Term" sits in the term column, but inside the header rows
    assert_eq!(g.lookup("Term"), Lookup::NotFound);
    assert_eq!(g.load_rows().expect("rows").len(), 6);
}

#[test]
fn test_suggest_by_prefix() {
    let g = glossary("suggest_prefix", 10);

    assert_eq!(g.suggest("ap").expect("suggest"), vec!["API", "Apfel"]);
    assert_eq!(g.suggest("S").expect("suggest"), vec!["Sprint", "Spike"]);
    assert!(g.suggest("zz").expect("suggest").is_empty());
    assert!(g.suggest("").expect("suggest").is_empty());
}

#[test]
fn test_suggest_respects_limit() {
    let g = glossary("suggest_limit", 1);
    assert_eq!(g.suggest("s").expect("suggest"), vec!["Sprint"]);
}

#[test]
fn test_missing_file() {
    let mut path = env::temp_dir();
    path.push("rworklog_no_such_glossary.xlsx");
    let g = Glossary::new(&path, GlossaryLayout::default(), 10);

    match g.lookup("API") {
        Lookup::Unavailable(msg) => {
            assert!(msg.contains("was not found"));
            assert!(msg.contains("rworklog_no_such_glossary.xlsx"));
        }
        other => panic!("unexpected lookup result: {other:?}"),
    }

    let err = g.suggest("A").unwrap_err();
    assert!(err.to_string().contains("was not found"));
}

#[test]
fn test_unreadable_file() {
    let mut path = env::temp_dir();
    path.push("rworklog_not_a_workbook.xlsx");
    std::fs::write(&path, b"this is not a spreadsheet").expect("write");

    let g = Glossary::new(&path, GlossaryLayout::default(), 10);
    match g.lookup("API") {
        Lookup::Unavailable(msg) => assert!(msg.starts_with("An error occurred:")),
        other => panic!("unexpected lookup result: {other:?}"),
    }
}

#[test]
fn test_cli_search_and_complete() {
    let path = glossary_fixture("cli_glossary");
    let file = path.to_string_lossy().to_string();

    rwl()
        .args(["glossary", "--file", &file, "search", "backlog"])
        .assert()
        .success()
        .stdout(contains("Ordered list of pending work"));

    rwl()
        .args(["glossary", "--file", &file, "search", "Kanban"])
        .assert()
        .success()
        .stdout(contains("Term not found."));

    rwl()
        .args(["glossary", "--file", &file, "complete", "Sp"])
        .assert()
        .success()
        .stdout(contains("Sprint"))
        .stdout(contains("Spike"));
}

#[test]
fn test_cli_missing_glossary_is_not_fatal() {
    rwl()
        .args([
            "glossary",
            "--file",
            "/nonexistent/rworklog/Daten.xlsx",
            "search",
            "API",
        ])
        .assert()
        .success()
        .stdout(contains("was not found"));

    rwl()
        .args([
            "glossary",
            "--file",
            "/nonexistent/rworklog/Daten.xlsx",
            "complete",
            "A",
        ])
        .assert()
        .success()
        .stdout(contains("was not found"));
}
