//! Command-line interface for vcf2xlsx.
//!
//! ## Usage
//!
//! ```text
//! # Export header metadata to a workbook
//! vcf2xlsx sample.vcf.gz sample_header.xlsx
//!
//! # Drop PEDIGREE lines instead of failing, print sheet row counts as JSON
//! vcf2xlsx sample.vcf sample.xlsx --pedigree skip --summary json
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::convert::{convert, ConversionSummary};
use crate::parsing::header::{ParseOptions, PedigreePolicy};

#[derive(Parser)]
#[command(name = "vcf2xlsx")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Export VCF header metadata to an Excel workbook")]
#[command(
    long_about = "vcf2xlsx reads the ## metadata block of a VCF file and writes one worksheet per category:\n\nFile Metadata, INFO, FILTER, FORMAT, ALT, contig, SAMPLE and PEDIGREE.\n\nVariant records are never read."
)]
pub struct Cli {
    /// Input VCF (plain text or gzip/bgzip compressed)
    pub input: PathBuf,

    /// Output .xlsx path
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// How to handle ##PEDIGREE lines
    #[arg(long, value_enum, default_value = "fail")]
    pub pedigree: PedigreePolicy,

    /// Print per-sheet row counts to stdout after writing
    #[arg(long, value_enum)]
    pub summary: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// One-line usage string, as rendered by clap.
#[must_use]
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Execute the conversion
///
/// # Errors
///
/// Returns an error if the header cannot be parsed or the workbook cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let options = ParseOptions {
        pedigree: cli.pedigree,
    };

    let summary = convert(&cli.input, &cli.output, options)?;

    if let Some(format) = cli.summary {
        print_summary(&summary, format)?;
    }

    Ok(())
}

fn print_summary(summary: &ConversionSummary, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!(
                "Wrote {} ({} sheets)\n",
                summary.output.display(),
                summary.sheets.len()
            );
            for sheet in &summary.sheets {
                println!("  {:<15} {:>6}", sheet.sheet, sheet.rows);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        OutputFormat::Tsv => {
            println!("sheet\trows");
            for sheet in &summary.sheets {
                println!("{}\t{}", sheet.sheet, sheet.rows);
            }
        }
    }
    Ok(())
}
