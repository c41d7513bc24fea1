//! Spreadsheet output for parsed header tables.
//!
//! A [`SpreadsheetSink`] receives every category table in sheet order and
//! persists them as named sheets of a single document. [`xlsx::XlsxSink`]
//! is the only implementation.

use std::path::Path;

use thiserror::Error;

use crate::core::table::HeaderTables;

pub mod xlsx;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Sheet '{sheet}' has too many rows ({rows})")]
    TooManyRows { sheet: String, rows: usize },
}

/// Destination for a complete set of header tables.
pub trait SpreadsheetSink {
    /// Write one sheet per table, in order, to `path`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the document cannot be built or written.
    fn write_tables(&self, tables: &HeaderTables, path: &Path) -> Result<(), ExportError>;
}
