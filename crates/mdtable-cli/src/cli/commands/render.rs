//! `mdtable render`: replay sort clicks and print the view.

use std::path::Path;

use anyhow::{Context, Result};
use mdtable_core::config::OutputFormat;
use mdtable_core::render::{self, CellRenderer, MarkdownCells, PlainCells};
use mdtable_core::table::SortSession;
use tracing::debug;

pub struct RenderOptions<'a> {
    pub file: Option<&'a Path>,
    pub format: OutputFormat,
    /// Header clicks, in order
    pub sort: &'a [usize],
    pub cell_markdown: bool,
    pub max_width: u16,
    pub strict: bool,
}

fn cell_renderer(cell_markdown: bool) -> &'static dyn CellRenderer {
    if cell_markdown {
        &MarkdownCells
    } else {
        &PlainCells
    }
}

pub fn run(opts: &RenderOptions<'_>) -> Result<()> {
    let text = super::read_input(opts.file)?;
    debug!(
        format = opts.format.display_name(),
        clicks = opts.sort.len(),
        "rendering table"
    );

    // HTML output degrades to the raw text rather than failing the page.
    if opts.format == OutputFormat::Html && opts.sort.is_empty() && !opts.strict {
        print!(
            "{}",
            render::html::render_or_fallback(&text, cell_renderer(opts.cell_markdown))
        );
        return Ok(());
    }

    let mut session = SortSession::from_source(&text).context("parse table")?;
    if opts.strict {
        session.table().validate().context("strict mode")?;
    }

    for &column in opts.sort {
        session
            .request_sort(column)
            .with_context(|| format!("sort by column {column}"))?;
    }

    let output = match opts.format {
        OutputFormat::Html => render::html::render(&session, cell_renderer(opts.cell_markdown)),
        OutputFormat::Terminal => {
            let mut out = render::terminal::render(&session, opts.max_width);
            out.push('\n');
            out
        }
        OutputFormat::Markdown => render::markdown::render(&session),
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(&session.view()).context("serialize table view")?;
            out.push('\n');
            out
        }
    };
    print!("{output}");
    Ok(())
}
