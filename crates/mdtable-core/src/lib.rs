//! Sortable markdown tables (parser, sorter, renderers, config).

pub mod config;
pub mod error;
pub mod render;
pub mod table;

pub use error::{TableError, TableErrorKind, TableResult};
