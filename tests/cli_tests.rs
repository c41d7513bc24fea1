//! End-to-end tests for the vcf2xlsx binary.
//!
//! Each test writes a small VCF to a temporary directory, runs the binary,
//! and reads the produced workbook back with calamine.

use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use calamine::{open_workbook, Data, Reader, Xlsx};
use predicates::prelude::*;
use tempfile::TempDir;

const EXAMPLE_VCF: &str = r#"##fileformat=VCFv4.2
##INFO=<ID=DP,Number=1,Type=Integer,Description="Depth">
##FILTER=<ID=q10,Description="Quality below 10">
##myKey=myValue
#CHROM	POS	ID	REF	ALT	QUAL	FILTER	INFO
chr1	100	.	A	G	50	PASS	DP=10
"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}

fn vcf2xlsx() -> Command {
    Command::cargo_bin("vcf2xlsx").expect("binary should build")
}

/// Read every sheet as a grid of optional strings (`None` = empty cell).
fn read_sheets(path: &Path) -> Vec<(String, Vec<Vec<Option<String>>>)> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("Failed to open workbook");
    let names = workbook.sheet_names();
    names
        .into_iter()
        .map(|name| {
            let range = workbook
                .worksheet_range(&name)
                .expect("Failed to read sheet");
            let rows = range
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|cell| match cell {
                            Data::Empty => None,
                            other => Some(other.to_string()),
                        })
                        .collect()
                })
                .collect();
            (name, rows)
        })
        .collect()
}

fn sheet<'a>(
    sheets: &'a [(String, Vec<Vec<Option<String>>>)],
    name: &str,
) -> &'a Vec<Vec<Option<String>>> {
    &sheets
        .iter()
        .find(|(n, _)| n == name)
        .unwrap_or_else(|| panic!("missing sheet {name}"))
        .1
}

fn cells(values: &[&str]) -> Vec<Option<String>> {
    values
        .iter()
        .map(|v| {
            if v.is_empty() {
                None
            } else {
                Some((*v).to_string())
            }
        })
        .collect()
}

#[test]
fn test_converts_example_header() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "example.vcf", EXAMPLE_VCF);
    let output = dir.path().join("example.xlsx");

    vcf2xlsx().arg(&input).arg(&output).assert().success();

    let sheets = read_sheets(&output);
    let names: Vec<&str> = sheets.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec!["File Metadata", "INFO", "FILTER", "FORMAT", "ALT", "contig", "SAMPLE", "PEDIGREE"]
    );

    assert_eq!(
        sheet(&sheets, "File Metadata"),
        &vec![
            cells(&["Name", "Value"]),
            cells(&["fileformat", "VCFv4.2"]),
            cells(&["myKey", "myValue"]),
        ]
    );
    assert_eq!(
        sheet(&sheets, "INFO"),
        &vec![
            cells(&["ID", "Number", "Type", "Description", "Source", "Version"]),
            cells(&["DP", "1", "Integer", "\"Depth\"", "", ""]),
        ]
    );
    assert_eq!(
        sheet(&sheets, "FILTER"),
        &vec![
            cells(&["ID", "Description"]),
            cells(&["q10", "\"Quality below 10\""]),
        ]
    );
}

#[test]
fn test_empty_categories_are_header_only_sheets() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "example.vcf", EXAMPLE_VCF);
    let output = dir.path().join("example.xlsx");

    vcf2xlsx().arg(&input).arg(&output).assert().success();

    let sheets = read_sheets(&output);
    assert_eq!(
        sheet(&sheets, "FORMAT"),
        &vec![cells(&["ID", "Number", "Type", "Description"])]
    );
    assert_eq!(sheet(&sheets, "contig"), &vec![cells(&["ID", "URL"])]);
    assert_eq!(
        sheet(&sheets, "SAMPLE"),
        &vec![cells(&["ID", "Genomes", "Mixture", "Description"])]
    );
    assert_eq!(sheet(&sheets, "PEDIGREE"), &vec![cells(&["Name", "Genome"])]);
}

#[test]
fn test_quoted_commas_and_escaped_quotes() {
    let vcf = r#"##ALT=<ID=DEL,Description="Deletion, relative to \"reference\"">
##contig=<ID=chr1,length=248956422,URL=ftp://example.org/chr1.fa>
#CHROM	POS	ID	REF	ALT	QUAL	FILTER	INFO
"#;
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "quoted.vcf", vcf);
    let output = dir.path().join("quoted.xlsx");

    vcf2xlsx().arg(&input).arg(&output).assert().success();

    let sheets = read_sheets(&output);
    assert_eq!(
        sheet(&sheets, "ALT")[1],
        cells(&["DEL", r#""Deletion, relative to \"reference\"""#])
    );
    assert_eq!(
        sheet(&sheets, "contig")[1],
        cells(&["chr1", "ftp://example.org/chr1.fa"])
    );
}

#[test]
fn test_metadata_after_column_header_is_ignored() {
    let vcf = "##fileformat=VCFv4.2\n#CHROM\tPOS\n##INFO=<ID=LATE,Number=1>\n##BOGUS line\n";
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "late.vcf", vcf);
    let output = dir.path().join("late.xlsx");

    vcf2xlsx().arg(&input).arg(&output).assert().success();

    let sheets = read_sheets(&output);
    assert_eq!(sheet(&sheets, "INFO").len(), 1);
}

#[test]
fn test_malformed_line_fails_without_output() {
    let vcf = "##fileformat=VCFv4.2\n##BOGUS stuff here\n#CHROM\n";
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "bogus.vcf", vcf);
    let output = dir.path().join("bogus.xlsx");

    vcf2xlsx()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid header line: BOGUS stuff here"));

    assert!(!output.exists());
}

#[test]
fn test_pedigree_fails_by_default() {
    let vcf = "##fileformat=VCFv4.2\n##PEDIGREE=<Name_0=G0-ID,Name_1=G1-ID>\n#CHROM\n";
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "ped.vcf", vcf);
    let output = dir.path().join("ped.xlsx");

    vcf2xlsx()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("PEDIGREE"));

    assert!(!output.exists());
}

#[test]
fn test_pedigree_skip() {
    let vcf = "##fileformat=VCFv4.2\n##PEDIGREE=<Name_0=G0-ID,Name_1=G1-ID>\n#CHROM\n";
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "ped.vcf", vcf);
    let output = dir.path().join("ped.xlsx");

    vcf2xlsx()
        .arg(&input)
        .arg(&output)
        .args(["--pedigree", "skip"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping PEDIGREE"));

    let sheets = read_sheets(&output);
    assert_eq!(sheet(&sheets, "PEDIGREE"), &vec![cells(&["Name", "Genome"])]);
}

#[test]
fn test_missing_arguments_prints_usage() {
    vcf2xlsx()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));

    vcf2xlsx()
        .arg("only_input.vcf")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.xlsx");

    vcf2xlsx()
        .arg(dir.path().join("does_not_exist.vcf"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));

    assert!(!output.exists());
}

#[test]
fn test_unwritable_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "example.vcf", EXAMPLE_VCF);
    let output = dir.path().join("missing_dir").join("out.xlsx");

    vcf2xlsx()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn test_gzipped_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("example.vcf.gz");
    let mut encoder = GzEncoder::new(
        std::fs::File::create(&input).unwrap(),
        Compression::default(),
    );
    encoder.write_all(EXAMPLE_VCF.as_bytes()).unwrap();
    encoder.finish().unwrap();
    let output = dir.path().join("example.xlsx");

    vcf2xlsx().arg(&input).arg(&output).assert().success();

    let sheets = read_sheets(&output);
    assert_eq!(sheet(&sheets, "INFO").len(), 2);
    assert_eq!(sheet(&sheets, "File Metadata").len(), 3);
}

#[test]
fn test_json_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "example.vcf", EXAMPLE_VCF);
    let output = dir.path().join("example.xlsx");

    let assert = vcf2xlsx()
        .arg(&input)
        .arg(&output)
        .args(["--summary", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let sheets = summary["sheets"].as_array().unwrap();
    assert_eq!(sheets.len(), 8);
    assert_eq!(sheets[0]["sheet"], "File Metadata");
    assert_eq!(sheets[0]["rows"], 2);
    assert_eq!(sheets[1]["sheet"], "INFO");
    assert_eq!(sheets[1]["rows"], 1);
}

#[test]
fn test_text_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "example.vcf", EXAMPLE_VCF);
    let output = dir.path().join("example.xlsx");

    vcf2xlsx()
        .arg(&input)
        .arg(&output)
        .args(["--summary", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(8 sheets)"))
        .stdout(predicate::str::is_match(r"(?m)^  File Metadata\s+2$").unwrap())
        .stdout(predicate::str::is_match(r"(?m)^  PEDIGREE\s+0$").unwrap());
}

#[test]
fn test_tsv_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "example.vcf", EXAMPLE_VCF);
    let output = dir.path().join("example.xlsx");

    let assert = vcf2xlsx()
        .arg(&input)
        .arg(&output)
        .args(["--summary", "tsv"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "sheet\trows",
            "File Metadata\t2",
            "INFO\t1",
            "FILTER\t1",
            "FORMAT\t0",
            "ALT\t0",
            "contig\t0",
            "SAMPLE\t0",
            "PEDIGREE\t0",
        ]
    );
}
