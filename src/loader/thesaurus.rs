use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use super::{cell, line_of, open, row_or_skip, Header, LoadReport};
use crate::config::ThesaurusColumns;
use crate::hierarchy::{Thesaurus, ThesaurusBuilder};
use crate::models::ThesaurusNode;

/// Load the thesaurus from a file separated by `delimiter`.
pub fn load_thesaurus(
    path: &Path,
    columns: &ThesaurusColumns,
    delimiter: u8,
) -> Result<(Thesaurus, LoadReport)> {
    let mut reader = open(path, delimiter)?;
    read_thesaurus(&mut reader, columns)
        .with_context(|| format!("Failed to load thesaurus: {}", path.display()))
}

/// Read thesaurus rows into an immutable [`Thesaurus`].
///
/// Rows with a malformed code or a code/term id already seen are skipped.
pub fn read_thesaurus<R: Read>(
    reader: &mut csv::Reader<R>,
    columns: &ThesaurusColumns,
) -> Result<(Thesaurus, LoadReport)> {
    let header = Header::read(reader)?;
    let code_col = header.require(&columns.code)?;
    let term_col = header.require(&columns.term)?;
    let id_col = header.require(&columns.term_id)?;
    let master_col = header.require(&columns.term_master_id)?;
    let authority_col = header.optional(&columns.authority_id);

    let mut report = LoadReport::default();
    let mut builder = ThesaurusBuilder::new();

    for (idx, result) in reader.records().enumerate() {
        let line = line_of(idx);
        let Some(row) = row_or_skip(result, line, &mut report) else {
            continue;
        };

        let fields = (
            cell(&row, code_col),
            cell(&row, term_col),
            cell(&row, id_col),
            cell(&row, master_col),
        );
        let (Some(code), Some(term), Some(term_id), Some(master)) = fields else {
            report.skip(line, "missing code, term, term id or master id");
            continue;
        };

        let mut node = ThesaurusNode::new(code, term, term_id, master);
        if let Some(authority) = authority_col.and_then(|col| cell(&row, col)) {
            node = node.with_authority(authority);
        }

        match builder.add(node) {
            Ok(()) => {}
            Err(e) if e.is_record_level() => report.skip(line, e),
            Err(e) => return Err(e.into()),
        }
    }

    report.loaded = builder.len();
    let thesaurus = builder.build();
    Ok((thesaurus, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::reader_from;

    #[test]
    fn test_reads_nodes_and_authority() {
        let data = "CN,term,TermID,TermMasterID,AAT_ID\n\
                    AUT.AAA,Waffen,11,11,300036926\n\
                    AUT,Objektname,1,1,\n\
                    AUT.AAA.AAA,Dolch,12,12,\n";
        let mut reader = reader_from(data.as_bytes(), b',');
        let (thesaurus, report) =
            read_thesaurus(&mut reader, &ThesaurusColumns::default()).unwrap();

        assert!(report.is_clean());
        assert_eq!(thesaurus.len(), 3);
        assert_eq!(
            thesaurus.get("AUT.AAA").unwrap().external_authority_id.as_deref(),
            Some("300036926")
        );
        assert!(thesaurus.get("AUT").unwrap().external_authority_id.is_none());
        assert_eq!(thesaurus.children_of("AUT.AAA").count(), 1);
    }

    #[test]
    fn test_authority_column_is_optional() {
        let data = "CN,term,TermID,TermMasterID\nAUT,Objektname,1,1\n";
        let mut reader = reader_from(data.as_bytes(), b',');
        let (thesaurus, _) = read_thesaurus(&mut reader, &ThesaurusColumns::default()).unwrap();
        assert_eq!(thesaurus.len(), 1);
    }

    #[test]
    fn test_bad_records_skipped() {
        let data = "CN,term,TermID,TermMasterID\n\
                    AUT,Objektname,1,1\n\
                    AUT..AAA,Kaputt,2,2\n\
                    AUT,Doppelt,3,3\n\
                    AUT.AAB,Schale,1,4\n\
                    AUT.AAC,,5,5\n\
                    AUT.AAD,Korb,6,6\n";
        let mut reader = reader_from(data.as_bytes(), b',');
        let (thesaurus, report) =
            read_thesaurus(&mut reader, &ThesaurusColumns::default()).unwrap();

        assert_eq!(thesaurus.len(), 2);
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 4);
        assert!(report.warnings[0].starts_with("line 3:"));
    }
}
