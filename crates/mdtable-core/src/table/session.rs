//! Sort session: one parsed table plus its current view.
//!
//! The session owns the [`ParsedTable`], the [`SortState`] and the display
//! rows. Presentation code reads from it and forwards header clicks back as
//! [`SortSession::request_sort`]. When the source text changes, call
//! [`SortSession::replace_source`] (or [`SortSession::reset`]).

use serde::Serialize;

use super::parse::{ParsedTable, parse};
use super::sort::{SortDirection, SortState, request_sort};
use crate::error::TableResult;

/// Visual weight of a sort indicator glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Full,
    Reduced,
}

impl Emphasis {
    pub fn opacity(self) -> f32 {
        match self {
            Emphasis::Full => 1.0,
            Emphasis::Reduced => 0.5,
        }
    }
}

/// Emphasis of the up/down indicators on one header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorState {
    pub ascending: Emphasis,
    pub descending: Emphasis,
}

/// Serializable snapshot of the current view.
#[derive(Debug, Clone, Serialize)]
pub struct TableView<'a> {
    pub headers: &'a [String],
    pub state: SortState,
    pub rows: &'a [Vec<String>],
}

#[derive(Debug, Clone)]
pub struct SortSession {
    table: ParsedTable,
    state: SortState,
    rows: Vec<Vec<String>>,
}

impl SortSession {
    pub fn new(table: ParsedTable) -> Self {
        let rows = table.rows.clone();
        Self {
            table,
            state: SortState::default(),
            rows,
        }
    }

    /// Parses `text` and starts a session on it.
    ///
    /// # Errors
    /// Returns `MalformedTable` if the text is not a table.
    pub fn from_source(text: &str) -> TableResult<Self> {
        parse(text).map(Self::new)
    }

    pub fn table(&self) -> &ParsedTable {
        &self.table
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    /// Rows in their current display order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn view(&self) -> TableView<'_> {
        TableView {
            headers: &self.table.headers,
            state: self.state,
            rows: &self.rows,
        }
    }

    /// Handles a click on the header of `column`.
    ///
    /// Sorts the current display order, so ties keep whatever order the
    /// previous sort left them in.
    ///
    /// # Errors
    /// Returns `InvalidColumnIndex` for a column the table does not have.
    /// The session is unchanged in that case.
    pub fn request_sort(&mut self, column: usize) -> TableResult<&[Vec<String>]> {
        let (rows, state) =
            request_sort(&self.rows, &self.state, column, self.table.column_count())?;
        self.rows = rows;
        self.state = state;
        Ok(&self.rows)
    }

    /// Restores the parsed row order and clears the sort state.
    pub fn reset(&mut self) {
        self.rows.clone_from(&self.table.rows);
        self.state = SortState::default();
    }

    /// Replaces the table with a freshly parsed one and resets.
    ///
    /// # Errors
    /// Returns the parse error and keeps the current table if `text` is not a
    /// table.
    pub fn replace_source(&mut self, text: &str) -> TableResult<()> {
        self.table = parse(text)?;
        self.reset();
        Ok(())
    }

    /// Indicator emphasis for the header of `column`.
    ///
    /// Only the indicator for the active direction on the active column is
    /// shown at full emphasis.
    pub fn indicator(&self, column: usize) -> IndicatorState {
        let active = self.state.is_active(column);
        let emphasis = |direction: SortDirection| {
            if active && self.state.direction == direction {
                Emphasis::Full
            } else {
                Emphasis::Reduced
            }
        };
        IndicatorState {
            ascending: emphasis(SortDirection::Ascending),
            descending: emphasis(SortDirection::Descending),
        }
    }
}
