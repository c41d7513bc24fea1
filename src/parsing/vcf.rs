//! Reader for the metadata block of a VCF file.
//!
//! Supports plain-text and gzip/bgzip compressed files. Compression is
//! detected from the gzip magic bytes rather than the file extension.
//! Reading stops at the first line that is not a `##` metadata line, so the
//! variant records are never loaded.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use crate::core::table::HeaderTables;
use crate::parsing::header::{parse_header_lines, ParseError, ParseOptions, METADATA_MARKER};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Open a VCF (optionally gzip/bgzip compressed) as a buffered line reader.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or read.
pub fn open_vcf(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let mut reader = BufReader::new(File::open(path)?);
    let gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
    debug!(path = %path.display(), gzipped, "Opened VCF");

    if gzipped {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// Collect the leading run of `##` lines, stopping at the first other line.
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure or invalid UTF-8.
pub fn read_header_lines<R: Read>(reader: R) -> Result<Vec<String>, ParseError> {
    let mut lines = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        if !line.starts_with(METADATA_MARKER) {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Parse the metadata block of a VCF file into category tables.
///
/// The file handle is released before parsing begins.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the first
/// classification/tokenization error.
pub fn parse_vcf_file(path: &Path, options: ParseOptions) -> Result<HeaderTables, ParseError> {
    let lines = {
        let reader = open_vcf(path)?;
        read_header_lines(reader)?
    };
    debug!(lines = lines.len(), "Read metadata block");
    parse_header_lines(&lines, options)
}
