//! End-to-end conversion: read header, build tables, write workbook.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::core::table::SheetSummary;
use crate::export::xlsx::XlsxSink;
use crate::export::{ExportError, SpreadsheetSink};
use crate::parsing::header::{ParseError, ParseOptions};
use crate::parsing::vcf::parse_vcf_file;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Failed to write {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: ExportError,
    },
}

/// What was written, sheet by sheet
#[derive(Debug, Clone, Serialize)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sheets: Vec<SheetSummary>,
}

/// Convert the header of `input` into an `.xlsx` workbook at `output`.
///
/// Nothing is written if the header fails to parse.
///
/// # Errors
///
/// Returns `ConvertError::Parse` if the input cannot be read or its header is
/// invalid, and `ConvertError::Export` if the workbook cannot be written.
pub fn convert(
    input: &Path,
    output: &Path,
    options: ParseOptions,
) -> Result<ConversionSummary, ConvertError> {
    convert_with(&XlsxSink, input, output, options)
}

/// Same as [`convert`] with a caller-provided sink.
///
/// # Errors
///
/// See [`convert`].
pub fn convert_with<S: SpreadsheetSink>(
    sink: &S,
    input: &Path,
    output: &Path,
    options: ParseOptions,
) -> Result<ConversionSummary, ConvertError> {
    let tables = parse_vcf_file(input, options).map_err(|source| ConvertError::Parse {
        path: input.to_path_buf(),
        source,
    })?;

    sink.write_tables(&tables, output)
        .map_err(|source| ConvertError::Export {
            path: output.to_path_buf(),
            source,
        })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rows = tables.total_rows(),
        "Wrote header metadata workbook"
    );

    Ok(ConversionSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        sheets: tables.summary(),
    })
}
