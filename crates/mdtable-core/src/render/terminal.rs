//! Terminal table output using comfy-table.

use comfy_table::{CellAlignment, ContentArrangement, Table};

use crate::table::{ColumnAlignment, Emphasis, SortSession};

fn cell_alignment(alignment: ColumnAlignment) -> CellAlignment {
    match alignment {
        ColumnAlignment::Left => CellAlignment::Left,
        ColumnAlignment::Center => CellAlignment::Center,
        ColumnAlignment::Right => CellAlignment::Right,
    }
}

/// Header label with a ▲/▼ marker on the active sort column.
fn header_label(session: &SortSession, column: usize, header: &str) -> String {
    let indicator = session.indicator(column);
    if indicator.ascending == Emphasis::Full {
        format!("{header} ▲")
    } else if indicator.descending == Emphasis::Full {
        format!("{header} ▼")
    } else {
        header.to_string()
    }
}

/// Renders the session's current view as a boxed terminal table.
pub fn render(session: &SortSession, max_width: u16) -> String {
    let mut table = Table::new();
    table.set_width(max_width);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers: Vec<String> = session
        .table()
        .headers
        .iter()
        .enumerate()
        .map(|(index, header)| header_label(session, index, header))
        .collect();
    table.set_header(headers);

    for row in session.rows() {
        table.add_row(row);
    }

    for (index, column) in table.column_iter_mut().enumerate() {
        column.set_cell_alignment(cell_alignment(session.table().alignment(index)));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORES: &str = "Name | Score\n:--- | ---:\nBob | 3\nAlice | 10";

    #[test]
    fn test_renders_headers_and_cells() {
        let session = SortSession::from_source(SCORES).unwrap();
        let out = render(&session, 80);

        assert!(out.contains("Name"));
        assert!(out.contains("Score"));
        assert!(out.contains("Alice"));
        assert!(!out.contains('▲'));
        assert!(out.lines().count() >= 4);
    }

    #[test]
    fn test_active_column_marker() {
        let mut session = SortSession::from_source(SCORES).unwrap();
        session.request_sort(1).unwrap();
        let out = render(&session, 80);
        assert!(out.contains("Score ▲"));

        session.request_sort(1).unwrap();
        let out = render(&session, 80);
        assert!(out.contains("Score ▼"));
        assert!(!out.contains("Name ▲"));
    }

    #[test]
    fn test_rows_in_display_order() {
        let mut session = SortSession::from_source(SCORES).unwrap();
        session.request_sort(0).unwrap();
        let out = render(&session, 80);
        assert!(out.find("Alice").unwrap() < out.find("Bob").unwrap());
    }
}
