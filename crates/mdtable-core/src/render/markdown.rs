//! Writes the current view back out as a markdown pipe table.

use crate::table::SortSession;

fn pipe_row<'a>(cells: impl IntoIterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push_str(" |");
    }
    line
}

/// Renders headers, canonical alignment markers and rows in display order.
///
/// Ragged rows are written with the cells they have.
pub fn render(session: &SortSession) -> String {
    let table = session.table();
    let mut lines = Vec::with_capacity(session.rows().len() + 2);

    lines.push(pipe_row(table.headers.iter().map(String::as_str)));
    let markers = table.column_alignments.iter().map(|a| a.marker());
    lines.push(pipe_row(markers));
    for row in session.rows() {
        lines.push(pipe_row(row.iter().map(String::as_str)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse;

    #[test]
    fn test_sorted_table_written_back() {
        let mut session = SortSession::from_source(
            "Name | Score | Note\n:--- | ---: | :---:\nBob | 3 | _ok_\nAlice | 10 | [x](http://x)",
        )
        .unwrap();
        session.request_sort(1).unwrap();

        assert_eq!(
            render(&session),
            "| Name | Score | Note |\n\
             | :--- | ---: | :---: |\n\
             | Alice | 10 | [x](http://x) |\n\
             | Bob | 3 | _ok_ |\n"
        );
    }

    #[test]
    fn test_output_reparses_to_view() {
        let mut session = SortSession::from_source("A | B\n--- | :---:\nz | 1\ny | 2").unwrap();
        session.request_sort(0).unwrap();

        let reparsed = parse(&render(&session)).unwrap();
        assert_eq!(reparsed.headers, session.table().headers);
        assert_eq!(
            reparsed.column_alignments,
            session.table().column_alignments
        );
        assert_eq!(reparsed.rows, session.rows());
    }
}
