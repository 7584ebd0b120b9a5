//! Term lookup against an external spreadsheet.
//!
//! The sheet is read fresh on every call. Its layout is positional: a block
//! of title/metadata rows, then one term per row in a fixed column with the
//! explanation in another fixed column.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use calamine::{Data, Range, Reader, open_workbook_auto};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

pub const NOT_FOUND: &str = "Term not found.";
pub const NO_EXPLANATION: &str = "No explanation available.";

/// Zero-based positions inside the first worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryLayout {
    pub header_rows: u32,
    pub term_column: u32,
    pub explanation_column: u32,
}

impl Default for GlossaryLayout {
    /// 13 header rows, term in column D, explanation in column H.
    fn default() -> Self {
        Self {
            header_rows: 13,
            term_column: 3,
            explanation_column: 7,
        }
    }
}

impl GlossaryLayout {
    /// Build from the 1-based column numbers stored in the config.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let to_index = |n: usize, name: &str| -> AppResult<u32> {
            n.checked_sub(1)
                .and_then(|i| u32::try_from(i).ok())
                .ok_or_else(|| AppError::Config(format!("{name} must be a column number >= 1")))
        };

        Ok(Self {
            header_rows: u32::try_from(cfg.glossary_header_rows).map_err(|_| {
                AppError::Config("glossary_header_rows is out of range".to_string())
            })?,
            term_column: to_index(cfg.glossary_term_column, "glossary_term_column")?,
            explanation_column: to_index(
                cfg.glossary_explanation_column,
                "glossary_explanation_column",
            )?,
        })
    }
}

/// A data row of the sheet: the term and its (possibly blank) explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryRow {
    pub term: String,
    pub explanation: String,
}

/// Result of an exact search, displayed as-is to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Explanation(String),
    NoExplanation,
    NotFound,
    /// The sheet could not be read; carries the message to show instead.
    Unavailable(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Explanation(text) => f.write_str(text),
            Lookup::NoExplanation => f.write_str(NO_EXPLANATION),
            Lookup::NotFound => f.write_str(NOT_FOUND),
            Lookup::Unavailable(msg) => f.write_str(msg),
        }
    }
}

pub struct Glossary {
    path: PathBuf,
    layout: GlossaryLayout,
    max_suggestions: usize,
}

fn cell_text(range: &Range<Data>, row: u32, col: u32) -> String {
    range
        .get_value((row, col))
        .map(|d| d.to_string().trim().to_string())
        .unwrap_or_default()
}

impl Glossary {
    pub fn new(path: impl Into<PathBuf>, layout: GlossaryLayout, max_suggestions: usize) -> Self {
        Self {
            path: path.into(),
            layout,
            max_suggestions,
        }
    }

    pub fn from_config(cfg: &Config, path_override: Option<&Path>) -> AppResult<Self> {
        let path = path_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cfg.glossary_path());
        Ok(Self::new(
            path,
            GlossaryLayout::from_config(cfg)?,
            cfg.glossary_max_suggestions,
        ))
    }

    /// Read the data rows (after the header block) of the first worksheet.
    pub fn load_rows(&self) -> AppResult<Vec<GlossaryRow>> {
        if !self.path.exists() {
            return Err(AppError::Glossary(format!(
                "Error: glossary file '{}' was not found.",
                self.path.display()
            )));
        }

        let failed = |e: &dyn fmt::Display| AppError::Glossary(format!("An error occurred: {e}"));

        let mut workbook = open_workbook_auto(&self.path).map_err(|e| failed(&e))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| failed(&"the workbook has no worksheets"))?
            .map_err(|e| failed(&e))?;

        // positions are absolute, whatever the sheet's used range is
        let Some((last_row, _)) = range.end() else {
            return Ok(Vec::new());
        };

        let mut rows = Vec::new();
        for row in self.layout.header_rows..=last_row {
            let term = cell_text(&range, row, self.layout.term_column);
            if term.is_empty() {
                continue;
            }
            rows.push(GlossaryRow {
                term,
                explanation: cell_text(&range, row, self.layout.explanation_column),
            });
        }

        Ok(rows)
    }

    /// Case-insensitive exact search; the first matching row wins.
    pub fn lookup(&self, term: &str) -> Lookup {
        let rows = match self.load_rows() {
            Ok(rows) => rows,
            Err(AppError::Glossary(msg)) => return Lookup::Unavailable(msg),
            Err(e) => return Lookup::Unavailable(format!("An error occurred: {e}")),
        };

        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Lookup::NotFound;
        }

        match rows.into_iter().find(|r| r.term.to_lowercase() == needle) {
            Some(row) if row.explanation.is_empty() => Lookup::NoExplanation,
            Some(row) => Lookup::Explanation(row.explanation),
            None => Lookup::NotFound,
        }
    }

    /// Distinct terms starting with `query` (case-insensitive), in sheet order.
    pub fn suggest(&self, query: &str) -> AppResult<Vec<String>> {
        let prefix = query.trim().to_lowercase();
        if prefix.is_empty() {
            return Ok(Vec::new());
        }

        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for row in self.load_rows()? {
            if out.len() >= self.max_suggestions {
                break;
            }
            if row.term.to_lowercase().starts_with(&prefix) && seen.insert(row.term.clone()) {
                out.push(row.term);
            }
        }

        Ok(out)
    }
}
