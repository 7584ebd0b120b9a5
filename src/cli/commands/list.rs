use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::total_duration;
use crate::core::chart::ChartLogic;
use crate::core::filter::period_range;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::models::TimeEntry;
use crate::ui::messages::{info, warning};
use crate::utils::formatting::{bold, truncate};
use crate::utils::table::Table;
use crate::utils::{date, format_hhmm};

const NOTE_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        date: anchor,
        no_chart,
    } = cmd
    {
        let store = EntryStore::open(&cfg.database)?;

        let entries = match period {
            Some(p) => {
                let range = period_range(*p, date::parse_anchor(anchor.as_deref())?)?;
                println!("📅 Entries for {} {}:\n", p, range);
                store.list_filtered(&range)?
            }
            None => {
                println!("📅 All entries:\n");
                store.list()?
            }
        };

        if entries.is_empty() {
            info("No entries recorded for this selection.");
        } else {
            print_entries(&entries);
        }

        // the chart mirrors whatever the listing shows
        if !*no_chart {
            let path = cfg.chart_file();
            let font = cfg.chart_font_path();
            if let Err(e) = ChartLogic::render(&entries, &path, font.as_deref()) {
                warning(format!("Chart not updated: {}", e));
            }
        }
    }
    Ok(())
}

fn print_entries(entries: &[TimeEntry]) {
    let mut table = Table::new(&[
        "ID", "Date", "Start", "End", "Duration", "Category", "Project", "Note",
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.date_str(),
            e.start_str(),
            e.end_str(),
            e.duration_str(),
            e.category.clone(),
            e.project.clone(),
            truncate(e.note_str(), NOTE_WIDTH),
        ]);
    }

    print!("{}", table.render());
    println!(
        "\n{} {} ({} entries)",
        bold("Total:"),
        format_hhmm(total_duration(entries)),
        entries.len()
    );
}
