//! Classifier and tokenizer for VCF `##` metadata lines.
//!
//! Structured lines look like:
//! `##INFO=<ID=DP,Number=1,Type=Integer,Description="Total depth, all samples">`
//!
//! Values may be double-quoted, and quoted values may contain commas, `=`
//! and backslash-escaped quotes. Quotes are kept in the extracted value.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::category::Category;
use crate::core::record::{AttributeRecord, FieldValue, KeypairRecord};
use crate::core::table::{HeaderTables, TablesBuilder};

/// Two-character marker every metadata line starts with
pub const METADATA_MARKER: &str = "##";

/// One token: runs of non-space/comma/quote characters and quoted spans,
/// glued together with no separator.
static ATTRIBUTE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:[^\s,"]|"(?:\\.|[^"])*")+"#).expect("valid regex"));

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header line: {0}")]
    MalformedHeaderLine(String),

    #[error("Unsupported header line (PEDIGREE is not implemented): {0}")]
    UnsupportedFeature(String),
}

/// What to do with `##PEDIGREE` lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PedigreePolicy {
    /// Abort the conversion
    #[default]
    Fail,
    /// Drop the line with a warning; the PEDIGREE sheet stays empty
    Skip,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    pub pedigree: PedigreePolicy,
}

/// Classify a line that has already had its `##` marker removed.
///
/// # Errors
///
/// Returns `ParseError::MalformedHeaderLine` if the line matches no structured
/// prefix and does not contain exactly one `=`.
pub fn classify(line: &str) -> Result<Category, ParseError> {
    if let Some(category) = Category::from_prefix(line) {
        return Ok(category);
    }
    if line.matches('=').count() == 1 {
        Ok(Category::Keypair)
    } else {
        Err(ParseError::MalformedHeaderLine(line.to_string()))
    }
}

/// Split the inside of a `<...>` list into `(name, value)` pairs, in line order.
///
/// # Errors
///
/// Returns `ParseError::MalformedHeaderLine` if a token has no `=`.
pub fn tokenize_attributes(body: &str) -> Result<Vec<(&str, &str)>, ParseError> {
    ATTRIBUTE_TOKEN
        .find_iter(body)
        .map(|m| {
            m.as_str()
                .split_once('=')
                .ok_or_else(|| ParseError::MalformedHeaderLine(body.to_string()))
        })
        .collect()
}

/// Parse `CATEGORY=<...>` into a record with one value per expected column.
///
/// Fields outside the category's column set are dropped; expected fields that
/// are not declared become `FieldValue::Absent`.
///
/// # Errors
///
/// Returns `ParseError::MalformedHeaderLine` if the line is not of the form
/// `NAME=<...>` or any attribute token lacks a `=`.
pub fn parse_attribute_line(line: &str, category: Category) -> Result<AttributeRecord, ParseError> {
    let body = line
        .split_once("=<")
        .and_then(|(_, rest)| rest.trim_end().strip_suffix('>'))
        .ok_or_else(|| ParseError::MalformedHeaderLine(line.to_string()))?;

    let fields: HashMap<&str, &str> = tokenize_attributes(body)
        .map_err(|_| ParseError::MalformedHeaderLine(line.to_string()))?
        .into_iter()
        .collect();

    let values = category
        .columns()
        .iter()
        .map(|column| FieldValue::from(fields.get(column).map(|v| (*v).to_string())))
        .collect();

    Ok(AttributeRecord { category, values })
}

/// Parse a free-form `name=value` line.
///
/// # Errors
///
/// Returns `ParseError::MalformedHeaderLine` unless the line has exactly one `=`.
pub fn parse_keypair_line(line: &str) -> Result<KeypairRecord, ParseError> {
    match line.split_once('=') {
        Some((name, value)) if !value.contains('=') => Ok(KeypairRecord {
            name: name.to_string(),
            value: value.to_string(),
        }),
        _ => Err(ParseError::MalformedHeaderLine(line.to_string())),
    }
}

/// Parse a header block into one table per category.
///
/// Only the leading run of `##` lines is examined: the first line without the
/// marker ends the scan, and nothing after it is inspected.
///
/// # Errors
///
/// Returns the first `ParseError` encountered; no partial tables are returned.
pub fn parse_header_lines<I, S>(lines: I, options: ParseOptions) -> Result<HeaderTables, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = TablesBuilder::new();

    for (index, raw) in lines.into_iter().enumerate() {
        let raw = raw.as_ref();
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let Some(line) = raw.strip_prefix(METADATA_MARKER) else {
            debug!(line = index + 1, "End of metadata block");
            break;
        };

        let category = classify(line)?;
        debug!(line = index + 1, %category, "Classified header line");

        match category {
            c if c.has_attribute_list() => builder.push_attribute(parse_attribute_line(line, c)?),
            Category::Pedigree => match options.pedigree {
                PedigreePolicy::Fail => {
                    return Err(ParseError::UnsupportedFeature(line.to_string()));
                }
                PedigreePolicy::Skip => {
                    warn!(line = index + 1, "Skipping PEDIGREE header line");
                }
            },
            _ => builder.push_keypair(parse_keypair_line(line)?),
        }
    }

    Ok(builder.finish())
}

/// Parse header text held in memory.
///
/// # Errors
///
/// See [`parse_header_lines`].
pub fn parse_header_text(text: &str, options: ParseOptions) -> Result<HeaderTables, ParseError> {
    parse_header_lines(text.lines(), options)
}
