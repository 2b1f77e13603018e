//! CLI command handlers.

pub mod config;
pub mod parse;
pub mod render;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads table text from `file`, or from stdin when it is absent or `-`.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("read table from {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read table from stdin")?;
            Ok(text)
        }
    }
}
