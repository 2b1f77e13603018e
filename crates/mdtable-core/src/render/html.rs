//! Sortable HTML table output.
//!
//! Each header carries a `data-column` index for wiring clicks back into
//! [`SortSession::request_sort`], plus up/down indicators whose opacity
//! reflects the current sort state.

use tracing::warn;

use super::{CellRenderer, escape_html};
use crate::table::SortSession;

const EMPTY_CELL: &str = "&nbsp;";

fn render_header(session: &SortSession, out: &mut String) {
    out.push_str("  <thead>\n    <tr>\n");
    for (index, header) in session.table().headers.iter().enumerate() {
        let alignment = session.table().alignment(index);
        let indicator = session.indicator(index);
        out.push_str(&format!(
            "      <th data-column=\"{index}\" style=\"cursor: pointer; position: relative; text-align: {align}; padding: 10px\">\n",
            align = alignment.as_css(),
        ));
        out.push_str(&format!(
            "        <div style=\"display: flex; align-items: center; justify-content: {}\">\n",
            alignment.as_css()
        ));
        out.push_str(&format!(
            "          <span style=\"margin-right: 5px\">{}</span>\n",
            escape_html(header)
        ));
        out.push_str(&format!(
            "          <span class=\"sort-asc\" style=\"opacity: {}\">↑</span>\n",
            indicator.ascending.opacity()
        ));
        out.push_str(&format!(
            "          <span class=\"sort-desc\" style=\"margin-left: 5px; opacity: {}\">↓</span>\n",
            indicator.descending.opacity()
        ));
        out.push_str("        </div>\n      </th>\n");
    }
    out.push_str("    </tr>\n  </thead>\n");
}

fn render_body(session: &SortSession, cells: &dyn CellRenderer, out: &mut String) {
    out.push_str("  <tbody>\n");
    for row in session.rows() {
        out.push_str("    <tr>\n");
        for (index, cell) in row.iter().enumerate() {
            let content = if cell.is_empty() {
                EMPTY_CELL.to_string()
            } else {
                cells.render_cell(cell)
            };
            out.push_str(&format!(
                "      <td style=\"text-align: {}; padding: 8px\">{content}</td>\n",
                session.table().alignment(index).as_css()
            ));
        }
        out.push_str("    </tr>\n");
    }
    out.push_str("  </tbody>\n");
}

/// Renders the session's current view as an HTML table.
pub fn render(session: &SortSession, cells: &dyn CellRenderer) -> String {
    let mut out = String::from("<table>\n");
    render_header(session, &mut out);
    render_body(session, cells, &mut out);
    out.push_str("</table>\n");
    out
}

/// Parses `text` and renders it, or falls back to the escaped raw text.
///
/// Never fails: a table that cannot be parsed is shown as a `<pre>` block
/// so the surrounding document still renders.
pub fn render_or_fallback(text: &str, cells: &dyn CellRenderer) -> String {
    match SortSession::from_source(text) {
        Ok(session) => render(&session, cells),
        Err(err) => {
            warn!(error = %err, "rendering raw text in place of table");
            format!(
                "<pre class=\"mdtable-fallback\">{}</pre>\n",
                escape_html(text)
            )
        }
    }
}
