//! Excel (.xlsx) sink built on `rust_xlsxwriter`.
//!
//! Each table becomes one worksheet: a bold header row with the category's
//! columns, then one row per record. `Absent` values leave the cell empty.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::debug;

use crate::core::table::{HeaderTables, MetadataTable};
use crate::export::{ExportError, SpreadsheetSink};

#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxSink;

impl SpreadsheetSink for XlsxSink {
    fn write_tables(&self, tables: &HeaderTables, path: &Path) -> Result<(), ExportError> {
        let mut workbook = build_workbook(tables)?;
        workbook.save(path)?;
        debug!(path = %path.display(), "Saved workbook");
        Ok(())
    }
}

/// Build an in-memory workbook with one sheet per table, in table order.
///
/// # Errors
///
/// Returns `ExportError` if a table does not fit in a worksheet.
pub fn build_workbook(tables: &HeaderTables) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    for table in tables.iter() {
        let worksheet = workbook.add_worksheet();
        write_table(worksheet, table, &header_format)?;
    }

    Ok(workbook)
}

fn write_table(
    worksheet: &mut Worksheet,
    table: &MetadataTable,
    header_format: &Format,
) -> Result<(), ExportError> {
    worksheet.set_name(table.sheet_name())?;

    for (col, name) in (0u16..).zip(table.columns()) {
        worksheet.write_string_with_format(0, col, *name, header_format)?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let row_num = u32::try_from(i + 1).map_err(|_| ExportError::TooManyRows {
            sheet: table.sheet_name().to_string(),
            rows: table.len(),
        })?;
        for (col, value) in (0u16..).zip(row) {
            if let Some(text) = value.as_deref() {
                worksheet.write_string(row_num, col, text)?;
            }
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofit();
    debug!(sheet = table.sheet_name(), rows = table.len(), "Wrote worksheet");
    Ok(())
}
