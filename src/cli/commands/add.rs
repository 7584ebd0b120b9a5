use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::models::EntryForm;
use crate::ui::messages::success;

/// Record a new work interval.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        category,
        project,
        note,
    } = cmd
    {
        let form = EntryForm {
            date: Some(date.clone()),
            start_time: Some(start.clone()),
            end_time: Some(end.clone()),
            category: category.clone(),
            project: project.clone(),
            note: note.clone(),
        };

        let store = EntryStore::open(&cfg.database)?;
        let saved = AddLogic::apply(&store, &form)?;

        success(format!(
            "Entry #{} saved: {} {}-{} ({}) {} / {}",
            saved.id,
            saved.date_str(),
            saved.start_str(),
            saved.end_str(),
            saved.duration_str(),
            saved.category,
            saved.project
        ));
    }

    Ok(())
}
