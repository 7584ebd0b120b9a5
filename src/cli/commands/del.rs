use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = EntryStore::open(&cfg.database)?;

        // fails with "not found" before prompting
        let entry = store.get(*id)?;

        if !*yes {
            let prompt = format!(
                "Delete entry #{} ({} {}-{} {} / {})? This action is irreversible.",
                entry.id,
                entry.date_str(),
                entry.start_str(),
                entry.end_str(),
                entry.category,
                entry.project
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        DeleteLogic::apply(&store, *id)?;
        success(format!("Entry #{} has been deleted.", id));
    }

    Ok(())
}
