//! Error types for table parsing and sorting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categories of table errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableErrorKind {
    /// Input has fewer than two lines (no header or no alignment row)
    MalformedTable,
    /// A data row's cell count disagrees with the header count
    ColumnCountMismatch,
    /// Sort requested on a column the table does not have
    InvalidColumnIndex,
}

impl fmt::Display for TableErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableErrorKind::MalformedTable => write!(f, "malformed_table"),
            TableErrorKind::ColumnCountMismatch => write!(f, "column_count_mismatch"),
            TableErrorKind::InvalidColumnIndex => write!(f, "invalid_column_index"),
        }
    }
}

/// Structured table error with a kind and a one-line message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableError {
    pub kind: TableErrorKind,
    pub message: String,
}

impl TableError {
    pub fn new(kind: TableErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a malformed-table error for input with too few lines.
    pub fn malformed(line_count: usize) -> Self {
        Self::new(
            TableErrorKind::MalformedTable,
            format!("expected a header line and an alignment line, found {line_count} line(s)"),
        )
    }

    /// Creates a column-count error for a ragged data row.
    ///
    /// `row` is zero-based among the data rows.
    pub fn column_count(row: usize, cells: usize, expected: usize) -> Self {
        Self::new(
            TableErrorKind::ColumnCountMismatch,
            format!("row {row} has {cells} cell(s), expected {expected}"),
        )
    }

    /// Creates an out-of-range sort column error.
    pub fn invalid_column(column: usize, column_count: usize) -> Self {
        Self::new(
            TableErrorKind::InvalidColumnIndex,
            format!("column {column} is out of range (table has {column_count} column(s))"),
        )
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TableError {}

/// Result type for table operations.
pub type TableResult<T> = std::result::Result<T, TableError>;
