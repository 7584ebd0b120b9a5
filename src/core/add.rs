use crate::db::EntryStore;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::{EntryForm, TimeEntry};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the form, store the entry and record it in the internal log.
    ///
    /// A rejected form never reaches the database; the entry and its log row
    /// commit together or not at all.
    pub fn apply(store: &EntryStore, form: &EntryForm) -> AppResult<TimeEntry> {
        let entry = form.validate()?;

        let tx = store.conn().unchecked_transaction()?;
        let saved = store.add(&entry)?;

        ttlog(
            &tx,
            "add",
            &saved.id.to_string(),
            &format!(
                "{} {}-{} {} / {} ({})",
                saved.date_str(),
                saved.start_str(),
                saved.end_str(),
                saved.category,
                saved.project,
                saved.duration_str()
            ),
        )?;

        tx.commit()?;
        Ok(saved)
    }
}
