//! CSV loaders for the census, cleanup table and thesaurus.
//!
//! Columns are looked up by header name. A missing required header fails the
//! whole file; a bad row is skipped, logged and counted in the [`LoadReport`].

mod census;
mod mapping;
mod thesaurus;

pub use census::{load_census, read_census};
pub use mapping::{load_mapping, read_mapping};
pub use thesaurus::{load_thesaurus, read_thesaurus};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Outcome of loading one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub(crate) fn skip(&mut self, line: usize, reason: impl std::fmt::Display) {
        let message = format!("line {line}: {reason}");
        tracing::warn!("Skipping record, {message}");
        self.skipped += 1;
        self.warnings.push(message);
    }

    pub fn is_clean(&self) -> bool {
        self.skipped == 0
    }
}

/// Open a CSV file with the given delimiter.
pub fn open(path: &Path, delimiter: u8) -> Result<csv::Reader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
    Ok(reader_from(file, delimiter))
}

/// Build a CSV reader over any byte source.
pub fn reader_from<R: Read>(source: R, delimiter: u8) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(source)
}

/// Resolved column positions for one table.
pub(crate) struct Header {
    headers: csv::StringRecord,
}

impl Header {
    pub(crate) fn read<R: Read>(reader: &mut csv::Reader<R>) -> Result<Self> {
        let headers = reader.headers().context("Failed to read CSV header")?.clone();
        Ok(Self { headers })
    }

    /// Position of a column the file must have.
    pub(crate) fn require(&self, name: &str) -> Result<usize> {
        match self.optional(name) {
            Some(idx) => Ok(idx),
            None => bail!("Missing required column '{name}'"),
        }
    }

    pub(crate) fn optional(&self, name: &str) -> Option<usize> {
        // Spreadsheet exports often carry a UTF-8 BOM on the first header
        self.headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
    }
}

/// Trimmed, non-empty cell value.
pub(crate) fn cell(row: &csv::StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a frequency cell. Whole numbers written as `12.0` are accepted.
pub(crate) fn parse_frequency(value: &str) -> Result<u64> {
    if let Ok(n) = value.parse::<u64>() {
        return Ok(n);
    }
    match value.parse::<f64>() {
        Ok(n) if n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 => Ok(n as u64),
        _ => bail!("invalid frequency '{value}'"),
    }
}

/// Unwrap one CSV row, recording rows the reader rejects.
pub(crate) fn row_or_skip(
    result: csv::Result<csv::StringRecord>,
    line: usize,
    report: &mut LoadReport,
) -> Option<csv::StringRecord> {
    match result {
        Ok(row) => Some(row),
        Err(e) => {
            report.skip(line, e);
            None
        }
    }
}

/// 1-based file line of a data row; the header occupies line 1.
pub(crate) fn line_of(idx: usize) -> usize {
    idx + 2
}
