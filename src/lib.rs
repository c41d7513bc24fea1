//! # vcf2xlsx
//!
//! Export the `##` metadata block of a VCF file to a multi-sheet Excel workbook.
//!
//! VCF headers declare their INFO, FILTER, FORMAT, ALT, contig and SAMPLE
//! fields in a compact `<key=value,...>` syntax whose quoted values may
//! themselves contain commas and `=`. `vcf2xlsx` tokenizes those lines,
//! projects each one onto a fixed column set for its category, and writes
//! one worksheet per category so the declarations can be audited without
//! reading raw text.
//!
//! ## Example
//!
//! ```rust
//! use vcf2xlsx::core::category::Category;
//! use vcf2xlsx::core::record::FieldValue;
//! use vcf2xlsx::parsing::header::{parse_header_text, ParseOptions};
//!
//! let header = "##INFO=<ID=DP,Number=1,Type=Integer,Description=\"Depth\">\n";
//! let tables = parse_header_text(header, ParseOptions::default()).unwrap();
//!
//! let info = tables.get(Category::Info);
//! assert_eq!(info.rows[0][0], FieldValue::Present("DP".to_string()));
//! assert_eq!(info.rows[0][4], FieldValue::Absent); // Source not declared
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Categories, records and tables
//! - [`parsing`]: Header line classification and tokenization
//! - [`export`]: Spreadsheet sinks
//! - [`convert`]: File-to-workbook pipeline
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod convert;
pub mod core;
pub mod export;
pub mod parsing;

pub use convert::{convert, ConversionSummary, ConvertError};
pub use core::category::Category;
pub use core::record::FieldValue;
pub use core::table::{HeaderTables, MetadataTable};
pub use parsing::header::{ParseError, ParseOptions, PedigreePolicy};
