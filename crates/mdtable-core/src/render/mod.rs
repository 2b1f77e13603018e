//! Presentation of a sort session.
//!
//! - `html`: the sortable HTML table (with a raw-text fallback)
//! - `terminal`: comfy-table output for the CLI
//! - `markdown`: the current view written back as a pipe table
//!
//! Cell contents go through a [`CellRenderer`], so HTML output can either
//! interpret cells as markdown or show them verbatim.

pub mod html;
pub mod markdown;
pub mod terminal;

use pulldown_cmark::{Options, Parser};

/// Turns one cell's markdown into display markup.
pub trait CellRenderer {
    fn render_cell(&self, markdown: &str) -> String;
}

/// Renders cell text as inline markdown using pulldown-cmark.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownCells;

impl CellRenderer for MarkdownCells {
    fn render_cell(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        let parser = Parser::new_ext(markdown, options);

        let mut out = String::new();
        pulldown_cmark::html::push_html(&mut out, parser);
        unwrap_paragraph(&out).to_string()
    }
}

/// Shows cell text verbatim (HTML-escaped).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCells;

impl CellRenderer for PlainCells {
    fn render_cell(&self, markdown: &str) -> String {
        escape_html(markdown)
    }
}

/// Strips a lone `<p>...</p>` wrapper so cell content stays inline.
fn unwrap_paragraph(html: &str) -> &str {
    let trimmed = html.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|inner| inner.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner,
        _ => trimmed,
    }
}

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
