//! Pipe-table parsing.
//!
//! Turns raw markdown table text into a [`ParsedTable`]:
//! - line 1: header cells
//! - line 2: alignment markers (`:---`, `:---:`, `---:`, `---`)
//! - lines 3+: data rows
//!
//! Parsing is permissive. Empty cells are dropped, so ragged rows pass
//! through unchanged and are reported by [`ParsedTable::ragged_rows`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{TableError, TableResult};

/// Text alignment for a column, derived from its alignment-row marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl ColumnAlignment {
    /// Classifies an alignment-row marker.
    ///
    /// Colons at both ends mean center, a leading colon means left, a
    /// trailing colon means right. No colons falls back to left.
    pub fn from_marker(marker: &str) -> Self {
        let leading = marker.starts_with(':');
        let trailing = marker.ends_with(':');
        match (leading, trailing) {
            (true, true) => ColumnAlignment::Center,
            (false, true) => ColumnAlignment::Right,
            (true, false) | (false, false) => ColumnAlignment::Left,
        }
    }

    /// Returns the CSS `text-align` value.
    pub fn as_css(self) -> &'static str {
        match self {
            ColumnAlignment::Left => "left",
            ColumnAlignment::Center => "center",
            ColumnAlignment::Right => "right",
        }
    }

    /// Returns the canonical alignment-row marker.
    pub fn marker(self) -> &'static str {
        match self {
            ColumnAlignment::Left => ":---",
            ColumnAlignment::Center => ":---:",
            ColumnAlignment::Right => "---:",
        }
    }
}

/// Shape of a data row whose cell count differs from the header count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowShape {
    /// Zero-based index among the data rows
    pub row: usize,
    /// Cells actually present
    pub cells: usize,
    /// Header count
    pub expected: usize,
}

/// Immutable result of parsing a markdown table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub column_alignments: Vec<ColumnAlignment>,
}

impl ParsedTable {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Alignment for a column, `Left` when the column has none.
    pub fn alignment(&self, column: usize) -> ColumnAlignment {
        self.column_alignments
            .get(column)
            .copied()
            .unwrap_or_default()
    }

    /// Data rows whose cell count differs from the header count.
    pub fn ragged_rows(&self) -> Vec<RowShape> {
        let expected = self.column_count();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() != expected)
            .map(|(row, cells)| RowShape {
                row,
                cells: cells.len(),
                expected,
            })
            .collect()
    }

    pub fn is_ragged(&self) -> bool {
        let expected = self.column_count();
        self.rows.iter().any(|row| row.len() != expected)
    }

    /// Strict check: fails with `ColumnCountMismatch` on the first ragged row.
    pub fn validate(&self) -> TableResult<()> {
        match self.ragged_rows().first() {
            Some(shape) => Err(TableError::column_count(
                shape.row,
                shape.cells,
                shape.expected,
            )),
            None => Ok(()),
        }
    }
}

/// Splits a table line on `|`, trimming cells and dropping empty ones.
fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect()
}

/// Parses raw markdown table text.
///
/// # Errors
/// Returns `MalformedTable` if the trimmed input has fewer than two lines.
pub fn parse(text: &str) -> TableResult<ParsedTable> {
    let trimmed = text.trim();
    let lines: Vec<&str> = trimmed.split('\n').collect();
    if trimmed.is_empty() {
        return Err(TableError::malformed(0));
    }
    if lines.len() < 2 {
        return Err(TableError::malformed(lines.len()));
    }

    let headers = split_cells(lines[0]);

    let mut column_alignments: Vec<ColumnAlignment> = lines[1]
        .split('|')
        .map(str::trim)
        .filter(|marker| !marker.is_empty())
        .map(ColumnAlignment::from_marker)
        .collect();

    if column_alignments.len() != headers.len() {
        warn!(
            headers = headers.len(),
            alignments = column_alignments.len(),
            "alignment row does not match header count"
        );
        column_alignments.resize(headers.len(), ColumnAlignment::Left);
    }

    let rows: Vec<Vec<String>> = lines[2..].iter().map(|line| split_cells(line)).collect();

    let table = ParsedTable {
        headers,
        rows,
        column_alignments,
    };

    for shape in table.ragged_rows() {
        warn!(
            row = shape.row,
            cells = shape.cells,
            expected = shape.expected,
            "ragged table row"
        );
    }

    debug!(
        columns = table.column_count(),
        rows = table.rows.len(),
        "parsed markdown table"
    );

    Ok(table)
}
