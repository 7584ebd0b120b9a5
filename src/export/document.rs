//! Table-oriented document writing, independent of the output backend.

/// One table column: header label, relative width and wrapping behaviour.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    /// Relative weight; backends scale the weights to the usable page width.
    pub weight: f32,
    /// Wrap long text onto several lines instead of clipping it.
    pub wrap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Body,
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub kind: RowKind,
}

impl TableRow {
    pub fn body(cells: Vec<String>) -> Self {
        Self {
            cells,
            kind: RowKind::Body,
        }
    }

    pub fn total(cells: Vec<String>) -> Self {
        Self {
            cells,
            kind: RowKind::Total,
        }
    }
}

/// Capability a report needs from a paginated document.
pub trait DocumentWriter {
    /// Start a new page; the table header is repeated at its top.
    fn add_page(&mut self);

    /// Append a row to the current page.
    ///
    /// Returns `false`, drawing nothing, when the row does not fit in the
    /// space left on the page.
    fn add_row(&mut self, row: &TableRow) -> bool;

    /// Close the document and return its bytes.
    fn finalize(self) -> Vec<u8>
    where
        Self: Sized;
}
