//! Column sorting with direction toggling.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::strip::strip;
use crate::error::{TableError, TableResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Current sort column and direction.
///
/// Starts unset/ascending. Once a column has been sorted there is no way
/// back to "unsorted" other than a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<usize>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn is_active(&self, column: usize) -> bool {
        self.column == Some(column)
    }
}

/// Direction a sort request on `column` should use.
///
/// Only a repeat click on the column that is currently ascending flips to
/// descending. Everything else sorts ascending.
pub fn next_direction(state: &SortState, column: usize) -> SortDirection {
    if state.is_active(column) && state.direction == SortDirection::Ascending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    }
}

/// Returns a copy of `rows` ordered by the stripped text of `column`.
///
/// Keys compare as plain strings (code point order, case-sensitive). The
/// sort is stable in both directions. Rows too short to have the column
/// sort with an empty key.
pub fn sort_rows(
    rows: &[Vec<String>],
    column: usize,
    direction: SortDirection,
) -> Vec<Vec<String>> {
    let mut keyed: Vec<(String, &Vec<String>)> = rows
        .iter()
        .map(|row| (row.get(column).map_or_else(String::new, |cell| strip(cell)), row))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));

    keyed.into_iter().map(|(_, row)| row.clone()).collect()
}

/// Applies one sort request to `rows`.
///
/// Returns the reordered rows and the new state. `rows` and `state` are
/// left untouched, so a failed request has no effect.
///
/// # Errors
/// Returns `InvalidColumnIndex` if `column >= column_count`.
pub fn request_sort(
    rows: &[Vec<String>],
    state: &SortState,
    column: usize,
    column_count: usize,
) -> TableResult<(Vec<Vec<String>>, SortState)> {
    if column >= column_count {
        return Err(TableError::invalid_column(column, column_count));
    }

    let direction = next_direction(state, column);
    debug!(column, ?direction, rows = rows.len(), "sorting table");

    let sorted = sort_rows(rows, column, direction);
    Ok((
        sorted,
        SortState {
            column: Some(column),
            direction,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableErrorKind;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| (*c).to_string()).collect())
            .collect()
    }

    fn column(rows: &[Vec<String>], index: usize) -> Vec<&str> {
        rows.iter().map(|r| r[index].as_str()).collect()
    }

    #[test]
    fn test_direction_toggle_sequence() {
        let mut state = SortState::default();
        let expected = [
            SortDirection::Ascending,
            SortDirection::Descending,
            SortDirection::Ascending,
        ];
        for want in expected {
            let data = rows(&[&["a"], &["b"]]);
            let (_, next) = request_sort(&data, &state, 0, 1).unwrap();
            assert_eq!(next.direction, want);
            assert_eq!(next.column, Some(0));
            state = next;
        }
    }

    #[test]
    fn test_switching_column_resets_to_ascending() {
        let state = SortState {
            column: Some(0),
            direction: SortDirection::Ascending,
        };
        assert_eq!(next_direction(&state, 1), SortDirection::Ascending);
        assert_eq!(next_direction(&state, 0), SortDirection::Descending);
    }

    #[test]
    fn test_lexicographic_not_numeric() {
        let data = rows(&[&["Bob", "3"], &["Alice", "10"]]);
        let (sorted, state) = request_sort(&data, &SortState::default(), 1, 2).unwrap();
        assert_eq!(state.direction, SortDirection::Ascending);
        assert_eq!(sorted, rows(&[&["Alice", "10"], &["Bob", "3"]]));
    }

    #[test]
    fn test_case_sensitive_code_point_order() {
        let data = rows(&[&["banana"], &["Cherry"], &["apple"]]);
        let sorted = sort_rows(&data, 0, SortDirection::Ascending);
        assert_eq!(column(&sorted, 0), vec!["Cherry", "apple", "banana"]);
    }

    #[test]
    fn test_sort_uses_stripped_keys() {
        let data = rows(&[&["[zeta](http://a)"], &["**beta**"], &["`alpha`"]]);
        let sorted = sort_rows(&data, 0, SortDirection::Ascending);
        // Original markup is kept in the output.
        assert_eq!(
            column(&sorted, 0),
            vec!["`alpha`", "**beta**", "[zeta](http://a)"]
        );
    }

    #[test]
    fn test_stable_ties_both_directions() {
        let data = rows(&[&["x", "1"], &["y", "2"], &["x", "3"], &["y", "4"]]);

        let asc = sort_rows(&data, 0, SortDirection::Ascending);
        assert_eq!(column(&asc, 1), vec!["1", "3", "2", "4"]);

        let desc = sort_rows(&data, 0, SortDirection::Descending);
        assert_eq!(column(&desc, 1), vec!["2", "4", "1", "3"]);

        assert_eq!(asc, sort_rows(&data, 0, SortDirection::Ascending));
    }

    #[test]
    fn test_input_rows_not_mutated() {
        let data = rows(&[&["b"], &["a"]]);
        let before = data.clone();
        let _ = sort_rows(&data, 0, SortDirection::Ascending);
        assert_eq!(data, before);
    }

    #[test]
    fn test_short_rows_sort_with_empty_key() {
        let data = rows(&[&["1", "b"], &["2"], &["3", "a"]]);
        let sorted = sort_rows(&data, 1, SortDirection::Ascending);
        assert_eq!(column(&sorted, 0), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_out_of_range_column_rejected() {
        let data = rows(&[&["a", "b"]]);
        let state = SortState::default();
        let err = request_sort(&data, &state, 2, 2).unwrap_err();
        assert_eq!(err.kind, TableErrorKind::InvalidColumnIndex);
    }
}
