use crate::db::EntryStore;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::TimeEntry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete entry `id`, returning what was removed.
    ///
    /// The row stays in place if the log write fails.
    pub fn apply(store: &EntryStore, id: i64) -> AppResult<TimeEntry> {
        let entry = store.get(id)?;

        let tx = store.conn().unchecked_transaction()?;
        store.delete(id)?;

        ttlog(
            &tx,
            "del",
            &id.to_string(),
            &format!(
                "Deleted {} {}-{} {} / {}",
                entry.date_str(),
                entry.start_str(),
                entry.end_str(),
                entry.category,
                entry.project
            ),
        )?;

        tx.commit()?;
        Ok(entry)
    }
}
