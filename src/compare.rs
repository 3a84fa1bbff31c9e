//! Line-by-line comparison of two distance tables in oracle text format
//!
//! Both sides must list the same records in the same order. Blank lines are
//! ignored and trailing whitespace (including `\r`) is trimmed, so tables dumped
//! from other tools compare cleanly.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::{Error, Result};

/// One record of a table: the part before the last `": "` and the distance after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub distance: u64,
}

/// A record that differs between the two tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based position among the non-blank records
    pub index: usize,
    pub expected: Record,
    pub actual: Record,
}

/// Outcome of comparing two tables of equal length
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    pub total: usize,
    pub mismatches: Vec<Mismatch>,
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Parses a table into records, rejecting lines without a `": <integer>"` suffix
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| -> Result<Record> {
            let malformed = || Error::MalformedLine(line_no, line.to_string());
            let (key, value) = line.rsplit_once(": ").ok_or_else(malformed)?;
            let distance = value.trim().parse().map_err(|_| malformed())?;
            Ok(Record {
                key: key.trim().to_string(),
                distance,
            })
        })
        .collect()
}

/// Compares an expected table with an actual one
pub fn compare_outputs(expected: &str, actual: &str) -> Result<Comparison> {
    let expected = parse_records(expected)?;
    let actual = parse_records(actual)?;

    if expected.len() != actual.len() {
        return Err(Error::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    let total = expected.len();
    let mismatches: Vec<Mismatch> = expected
        .into_iter()
        .zip(actual)
        .enumerate()
        .filter(|(_, (e, a))| e != a)
        .map(|(i, (expected, actual))| Mismatch {
            index: i + 1,
            expected,
            actual,
        })
        .collect();

    debug!("compared {} records, {} mismatches", total, mismatches.len());
    Ok(Comparison { total, mismatches })
}

/// Reads and compares two table files
pub fn compare_files(expected: &Path, actual: &Path) -> Result<Comparison> {
    let comparison = compare_outputs(
        &fs::read_to_string(expected)?,
        &fs::read_to_string(actual)?,
    )?;
    info!(
        "{} vs {}: {} records, {} mismatches",
        expected.display(),
        actual.display(),
        comparison.total,
        comparison.mismatches.len()
    );
    Ok(comparison)
}
