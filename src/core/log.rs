use crate::db::EntryStore;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::utils::formatting::truncate;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const OP_WIDTH: usize = 40;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| {
        Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern is valid")
    });
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for each operation kind
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "export" => Colour::Blue,
        "chart" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &EntryStore) -> AppResult<()> {
        let rows = load_log(store.conn())?;

        if rows.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = rows
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);

        let dates: Vec<String> = rows
            .iter()
            .map(|r| {
                chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.date.clone())
            })
            .collect();
        let date_w = dates.iter().map(String::len).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (row, date) in rows.iter().zip(&dates) {
            let color = color_for_operation(&row.operation);

            let mut colored = color.paint(row.operation.as_str()).to_string();
            if !row.target.is_empty() {
                colored.push_str(&format!(
                    " ({})",
                    truncate(&row.target, OP_WIDTH.saturating_sub(row.operation.len() + 3))
                ));
            }

            // padding computed on the visible width, without ANSI codes
            let padding = " ".repeat(OP_WIDTH.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                date,
                colored,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
