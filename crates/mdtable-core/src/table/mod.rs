//! Table model: parsing, sort keys, sorting and the sort session.

pub mod parse;
pub mod session;
pub mod sort;
pub mod strip;

pub use parse::{ColumnAlignment, ParsedTable, RowShape, parse};
pub use session::{Emphasis, IndicatorState, SortSession, TableView};
pub use sort::{SortDirection, SortState, next_direction, request_sort, sort_rows};
pub use strip::strip;
