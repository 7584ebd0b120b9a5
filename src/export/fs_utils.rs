//! Guard against clobbering an existing report file.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Ok when `path` is free, `force` is set, or the user agrees to replace it.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} is already there.", path.display()));
    print!("Replace it with the new report? [y/N]: ");
    io::stdout().flush()?;

    let mut reply = String::new();
    io::stdin().lock().read_line(&mut reply)?;

    match reply.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Replacing the existing file.");
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "{} kept unchanged; pass --force to replace it",
            path.display()
        ))),
    }
}
