//! End-to-end tests over CSV inputs
//!
//! Loads a small census, cleanup table and thesaurus from disk and checks:
//! - Loader skip accounting
//! - Classification and resolution of census names
//! - Navigation over the loaded thesaurus
//! - The aggregated report and the CSV export

use museum_mapper::classify::{classify, Category};
use museum_mapper::config::Config;
use museum_mapper::error::CoreError;
use museum_mapper::export::{export_to_file, name_results, ExportFormat};
use museum_mapper::hierarchy::{depth, is_ancestor, Thesaurus};
use museum_mapper::loader::{load_census, load_mapping, load_thesaurus};
use museum_mapper::matcher::MatchStatus;
use museum_mapper::models::{MappingTable, NameCensus};
use museum_mapper::report::{Report, ReportOptions};
use museum_mapper::resolve::{resolve, ResolutionOutcome};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CENSUS: &str = "\
ObjectName,AnzahlvonObjectName
Schale,120
Holzlöffel,12
Amulett,7
Kriegsbeute,3
Kästchen-Set,2
Chinesische Holzschale,2
\"Maske, Dublette\",1
Körbchen,1
Kopfbedeckungen,1
Schmuckanhängern,1
,5
";

const MAPPING: &str = "\
ObjectName,Begriff bereinigt,AnzahlvonObjectName
Holzlöffel,Löffel,12
Kriegsbeute,*,3
Amulett,,7
";

const THESAURUS: &str = "\
CN,term,TermID,TermMasterID,AAT_ID
AUT,Objektname,1,1,
AUT.AAA,Sachgruppen,2,2,
AUT.AAA.AAC,Kultur,3,3,
AUT.AAA.AAC.AAH,Behälter,4,4,
AUT.AAA.AAC.AAH.AAA,Korb,5,5,300014540
AUT.AAA.AAC.AAH.AAB,Schale,6,6,
AUT.AAA.AAC.AAI,Löffel,7,7,
AUT.AAA.AAD,Technik,8,8,
AUT..BAD,Kaputt,9,9,
";

struct Fixture {
    _dir: TempDir,
    census: NameCensus,
    mapping: MappingTable,
    thesaurus: Thesaurus,
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn load_fixture() -> Fixture {
    let dir = TempDir::new().unwrap();
    let columns = Config::default().columns;

    let (census, census_report) =
        load_census(&write(dir.path(), "census.csv", CENSUS), &columns.census, b',').unwrap();
    assert_eq!(census_report.loaded, 10);
    assert_eq!(census_report.skipped, 1);

    let (mapping, mapping_report) =
        load_mapping(&write(dir.path(), "mapping.csv", MAPPING), &columns.mapping, b',')
            .unwrap();
    assert!(mapping_report.is_clean());

    let (thesaurus, thesaurus_report) =
        load_thesaurus(
            &write(dir.path(), "thesaurus.csv", THESAURUS),
            &columns.thesaurus,
            b',',
        )
        .unwrap();
    assert_eq!(thesaurus_report.loaded, 8);
    assert_eq!(thesaurus_report.skipped, 1);

    Fixture {
        _dir: dir,
        census,
        mapping,
        thesaurus,
    }
}

#[test]
fn test_census_names_classify() {
    let fixture = load_fixture();
    let category = |name: &str| {
        let record = fixture.census.get(name).unwrap();
        classify(&record.name)
    };

    assert_eq!(category("Kästchen-Set"), Category::Diminutive);
    assert_eq!(category("Chinesische Holzschale"), Category::MaterialObject);
    assert_eq!(category("Kopfbedeckungen"), Category::Simple);
    assert_eq!(category("Schmuckanhängern"), Category::Unclassified);
    assert_eq!(category("Maske, Dublette"), Category::Descriptive);
}

#[test]
fn test_resolution_outcomes() {
    let fixture = load_fixture();
    let mapping = &fixture.mapping;

    assert_eq!(
        resolve("Holzlöffel", mapping).unwrap(),
        ResolutionOutcome::Consolidated("Löffel".to_string())
    );
    assert_eq!(resolve("Kriegsbeute", mapping).unwrap(), ResolutionOutcome::Excluded);
    assert_eq!(resolve("Amulett", mapping).unwrap(), ResolutionOutcome::Unmapped);
    assert!(matches!(
        resolve("Schale", mapping),
        Err(CoreError::NotFound { .. })
    ));
}

#[test]
fn test_navigation_over_loaded_thesaurus() {
    let fixture = load_fixture();
    let thesaurus = &fixture.thesaurus;

    assert_eq!(depth("AUT.AAA.AAC").unwrap(), 3);
    assert!(is_ancestor("AUT.AAA.AAC", "AUT.AAA.AAC.AAH").unwrap());
    assert!(!is_ancestor("AUT.AAA.AA", "AUT.AAA.AAC.AAH").unwrap());
    assert!(matches!(
        depth("AUT..AAA"),
        Err(CoreError::MalformedCode { .. })
    ));

    let children: Vec<_> = thesaurus
        .children_of("AUT.AAA.AAC")
        .map(|n| n.term.as_str())
        .collect();
    assert_eq!(children, vec!["Behälter", "Löffel"]);

    // Raw prefix crosses the segment boundary; the subtree does not
    assert_eq!(thesaurus.find_by_code_prefix("AUT.AAA.AA").count(), 6);
    assert_eq!(thesaurus.subtree_of("AUT.AAA.AA").count(), 0);
    assert_eq!(thesaurus.subtree_of("AUT.AAA").count(), 6);

    let korb = thesaurus.find_by_term("korb").next().unwrap();
    assert_eq!(korb.external_authority_id.as_deref(), Some("300014540"));
    assert!(thesaurus.get("AUT..BAD").is_none());
}

#[test]
fn test_report_over_loaded_inputs() {
    let fixture = load_fixture();
    let report = Report::build(
        &fixture.census,
        &fixture.mapping,
        &fixture.thesaurus,
        &ReportOptions::default(),
    );

    let diminutive = report.category(Category::Diminutive).unwrap();
    assert_eq!(diminutive.examples, vec!["Kästchen-Set", "Körbchen"]);

    assert_eq!(report.mapping.consolidated, 1);
    assert_eq!(report.mapping.excluded, 1);
    assert_eq!(report.mapping.unmapped, 1);
    assert_eq!(report.mapping.no_source_data, 7);

    assert_eq!(report.census.total_objects, 150);
    assert_eq!(report.thesaurus.nodes, 8);
    assert_eq!(report.thesaurus.depth_histogram.get(&5), Some(&2));

    let review = &report.review;
    assert_eq!(review.queued, 9);
    assert_eq!(review.accepted, 2);
    assert_eq!(review.needs_review, 1);
    assert_eq!(review.ignored, 2);
    assert_eq!(review.unmatched, 4);
}

#[test]
fn test_csv_export_round_trip_through_file() {
    let fixture = load_fixture();
    let results = name_results(&fixture.census, &fixture.mapping, &fixture.thesaurus, 80);

    let out_dir = TempDir::new().unwrap();
    let path = out_dir.path().join("results.csv");
    export_to_file(&results, ExportFormat::Csv, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 13);
    assert_eq!(&headers[0], "name");
    assert_eq!(&headers[12], "reasoning");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(&rows[0][0], "Schale");
    assert_eq!(&rows[0][3], "no_source_data");
    assert_eq!(&rows[0][6], "AUT.AAA.AAC.AAH.AAB");

    let chinese = results
        .iter()
        .find(|r| r.name == "Chinesische Holzschale")
        .unwrap();
    assert_eq!(chinese.status, MatchStatus::NeedsReview);
    assert_eq!(chinese.thesaurus_term.as_deref(), Some("Schale"));
}
