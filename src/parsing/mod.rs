//! Parsers for VCF header metadata.
//!
//! - **header**: classify `##` lines and tokenize their `<...>` attribute lists
//! - **vcf**: read the metadata block from a `.vcf` or `.vcf.gz` file
//!
//! ## Example
//!
//! ```rust
//! use vcf2xlsx::core::category::Category;
//! use vcf2xlsx::parsing::header::{parse_header_text, ParseOptions};
//!
//! let header = "##fileformat=VCFv4.2\n##FILTER=<ID=q10,Description=\"Quality below 10\">\n";
//! let tables = parse_header_text(header, ParseOptions::default()).unwrap();
//! assert_eq!(tables.get(Category::Filter).len(), 1);
//! ```
//!
//! ## Line classification
//!
//! After the `##` marker is removed, a line is matched against the prefixes
//! `INFO`, `FILTER`, `FORMAT`, `ALT`, `contig`, `SAMPLE`, `PEDIGREE` in that
//! order. Anything else must be a single `name=value` pair.

pub mod header;
pub mod vcf;
