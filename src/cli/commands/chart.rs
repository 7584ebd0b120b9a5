use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::{ChartLogic, ChartOutcome};
use crate::db::EntryStore;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { file } = cmd {
        let store = EntryStore::open(&cfg.database)?;
        let entries = store.list()?;

        let path = match file {
            Some(f) => expand_tilde(f),
            None => cfg.chart_file(),
        };
        let font = cfg.chart_font_path();

        let outcome = ChartLogic::render(&entries, &path, font.as_deref())?;

        let summary = match outcome {
            ChartOutcome::Pie { slices, .. } => format!("{} categories", slices),
            ChartOutcome::Placeholder { .. } => "no data".to_string(),
            ChartOutcome::NoWorkedTime { .. } => "no worked time".to_string(),
        };
        ttlog(store.conn(), "chart", &summary, &path.display().to_string())?;

        success(format!("Chart written ({}): {}", summary, path.display()));
    }
    Ok(())
}
