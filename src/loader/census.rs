use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::{cell, line_of, open, parse_frequency, row_or_skip, Header, LoadReport};
use crate::config::CensusColumns;
use crate::models::{NameCensus, NameRecord};

/// Load the census from a file separated by `delimiter`.
pub fn load_census(
    path: &Path,
    columns: &CensusColumns,
    delimiter: u8,
) -> Result<(NameCensus, LoadReport)> {
    let mut reader = open(path, delimiter)?;
    read_census(&mut reader, columns)
        .with_context(|| format!("Failed to load census: {}", path.display()))
}

/// Read census rows in file order; the row position is the name's rank.
pub fn read_census<R: Read>(
    reader: &mut csv::Reader<R>,
    columns: &CensusColumns,
) -> Result<(NameCensus, LoadReport)> {
    let header = Header::read(reader)?;
    let name_col = header.require(&columns.name)?;
    let freq_col = header.require(&columns.frequency)?;

    let mut report = LoadReport::default();
    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for (idx, result) in reader.records().enumerate() {
        let line = line_of(idx);
        let Some(row) = row_or_skip(result, line, &mut report) else {
            continue;
        };
        let Some(name) = cell(&row, name_col) else {
            report.skip(line, "missing object name");
            continue;
        };
        let Some(frequency) = cell(&row, freq_col) else {
            report.skip(line, format!("missing frequency for '{name}'"));
            continue;
        };
        let frequency = match parse_frequency(frequency) {
            Ok(frequency) => frequency,
            Err(e) => {
                report.skip(line, e);
                continue;
            }
        };
        if !seen.insert(name.to_string()) {
            report.skip(line, format!("duplicate name '{name}'"));
            continue;
        }
        records.push(NameRecord::new(name, frequency));
    }

    let (census, _) = NameCensus::from_records(records);
    report.loaded = census.len();

    tracing::info!(
        names = report.loaded,
        skipped = report.skipped,
        "Loaded name census"
    );
    Ok((census, report))
}
