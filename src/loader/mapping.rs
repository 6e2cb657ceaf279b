use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::{cell, line_of, open, parse_frequency, row_or_skip, Header, LoadReport};
use crate::config::MappingColumns;
use crate::models::{CleanedTerm, MappingEntry, MappingTable};

/// Load the mapping table from a file separated by `delimiter`.
pub fn load_mapping(
    path: &Path,
    columns: &MappingColumns,
    delimiter: u8,
) -> Result<(MappingTable, LoadReport)> {
    let mut reader = open(path, delimiter)?;
    read_mapping(&mut reader, columns)
        .with_context(|| format!("Failed to load mapping table: {}", path.display()))
}

/// Read cleanup rows. The frequency column is optional and defaults to 0.
pub fn read_mapping<R: Read>(
    reader: &mut csv::Reader<R>,
    columns: &MappingColumns,
) -> Result<(MappingTable, LoadReport)> {
    let header = Header::read(reader)?;
    let original_col = header.require(&columns.original)?;
    let cleaned_col = header.require(&columns.cleaned)?;
    let freq_col = header.optional(&columns.frequency);

    let mut report = LoadReport::default();
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for (idx, result) in reader.records().enumerate() {
        let line = line_of(idx);
        let Some(row) = row_or_skip(result, line, &mut report) else {
            continue;
        };
        let Some(original) = cell(&row, original_col) else {
            report.skip(line, "missing object name");
            continue;
        };
        let frequency = match freq_col.and_then(|col| cell(&row, col)) {
            None => 0,
            Some(value) => match parse_frequency(value) {
                Ok(n) => n,
                Err(e) => {
                    report.skip(line, e);
                    continue;
                }
            },
        };
        if !seen.insert(original.to_string()) {
            report.skip(line, format!("duplicate name '{original}'"));
            continue;
        }
        let cleaned = CleanedTerm::from_cell(row.get(cleaned_col));
        entries.push(MappingEntry::new(original, cleaned, frequency));
    }

    let (table, _) = MappingTable::from_entries(entries);
    report.loaded = table.len();

    tracing::info!(
        entries = report.loaded,
        skipped = report.skipped,
        "Loaded mapping table"
    );
    Ok((table, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::reader_from;

    #[test]
    fn test_cleaned_cell_states() {
        let data = "ObjectName,Begriff bereinigt,AnzahlvonObjectName\n\
                    Holzlöffel, Löffel ,5\n\
                    Kriegsbeute,*,2\n\
                    Amulett,,9\n\
                    Pfeilspitze\n";
        let mut reader = reader_from(data.as_bytes(), b',');
        let (table, report) = read_mapping(&mut reader, &MappingColumns::default()).unwrap();

        assert!(report.is_clean());
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.get("Holzlöffel").unwrap().cleaned,
            CleanedTerm::Target("Löffel".to_string())
        );
        assert_eq!(table.get("Kriegsbeute").unwrap().cleaned, CleanedTerm::Excluded);
        assert_eq!(table.get("Amulett").unwrap().cleaned, CleanedTerm::Absent);
        assert_eq!(table.get("Amulett").unwrap().frequency, 9);
        // Short row: no cleaned cell, no frequency
        assert_eq!(table.get("Pfeilspitze").unwrap().cleaned, CleanedTerm::Absent);
        assert_eq!(table.get("Pfeilspitze").unwrap().frequency, 0);
    }

    #[test]
    fn test_frequency_column_is_optional() {
        let data = "ObjectName;Begriff bereinigt\nSpeer;Lanze\n";
        let mut reader = reader_from(data.as_bytes(), b';');
        let (table, _) = read_mapping(&mut reader, &MappingColumns::default()).unwrap();
        assert_eq!(table.get("Speer").unwrap().frequency, 0);
    }

    #[test]
    fn test_duplicates_and_bad_counts_skipped() {
        let data = "ObjectName,Begriff bereinigt,AnzahlvonObjectName\n\
                    Speer,Lanze,3\n\
                    Speer,*,1\n\
                    Beil,,viele\n";
        let mut reader = reader_from(data.as_bytes(), b',');
        let (table, report) = read_mapping(&mut reader, &MappingColumns::default()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(
            table.get("Speer").unwrap().cleaned,
            CleanedTerm::Target("Lanze".to_string())
        );
    }
}
