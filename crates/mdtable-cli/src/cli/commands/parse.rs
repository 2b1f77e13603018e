//! `mdtable parse`: table model as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use mdtable_core::table::{self, ParsedTable, RowShape};
use serde::Serialize;

#[derive(Serialize)]
struct ParseReport<'a> {
    #[serde(flatten)]
    table: &'a ParsedTable,
    ragged_rows: Vec<RowShape>,
}

pub fn run(file: Option<&Path>, strict: bool) -> Result<()> {
    let text = super::read_input(file)?;
    let table = table::parse(&text).context("parse table")?;
    if strict {
        table.validate().context("strict mode")?;
    }

    let report = ParseReport {
        table: &table,
        ragged_rows: table.ragged_rows(),
    };
    let json = serde_json::to_string_pretty(&report).context("serialize table")?;
    println!("{json}");
    Ok(())
}
