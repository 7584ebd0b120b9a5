use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOutcome, ExportRequest, notify_export_success};
use crate::ui::messages::{info, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        period,
        date: anchor,
        format,
        file,
        force,
    } = cmd
    {
        let req = ExportRequest {
            format: *format,
            period: *period,
            anchor: date::parse_anchor(anchor.as_deref())?,
            file: file.as_deref().map(expand_tilde),
            reports_dir: cfg.reports_path(),
            force: *force,
        };

        info(format!(
            "Exporting {} ({} around {})",
            req.format.as_str().to_uppercase(),
            req.period,
            req.anchor
        ));

        let store = EntryStore::open(&cfg.database)?;

        match ExportLogic::export(&store, &req)? {
            ExportOutcome::Written { path, entries, .. } => {
                notify_export_success(
                    &format!("{} ({} entries)", req.format.as_str().to_uppercase(), entries),
                    &path,
                );
            }
            ExportOutcome::NoData(range) => {
                warning(format!("No data for period {} {}. Nothing exported.", req.period, range));
            }
        }
    }
    Ok(())
}
