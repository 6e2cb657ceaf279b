//! Tests for the object-name classifier

use super::*;

#[test]
fn test_diminutive_suffixes() {
    assert_eq!(classify("Kästchen"), Category::Diminutive);
    assert_eq!(classify("Figürlein"), Category::Diminutive);
    assert_eq!(classify("Dirndlerl"), Category::Diminutive);
    assert_eq!(classify("KÖRBCHEN"), Category::Diminutive);
}

#[test]
fn test_diminutive_is_suffix_not_substring() {
    // "chen" in the middle of a word does not count
    assert_eq!(classify("Blechenschale"), Category::MaterialObject);
    assert_eq!(classify("Lichenbrett"), Category::Simple);
}

#[test]
fn test_diminutive_beats_compound() {
    assert_eq!(classify("Kästchen-Set"), Category::Diminutive);
}

#[test]
fn test_diminutive_only_at_name_or_component_end() {
    // A diminutive word followed by more words is not a diminutive name
    assert_eq!(classify("Körbchen aus Holz"), Category::MaterialObject);
    assert_eq!(classify("Kästchen mit Deckel"), Category::Descriptive);
    assert_eq!(classify("Mädchen Figur"), Category::Descriptive);

    // Each part around a connector still counts
    assert_eq!(classify("Set + Kästchen"), Category::Diminutive);
    assert_eq!(classify("Holz-Kästchen"), Category::Diminutive);

    let result = classify_with_evidence("Kästchen-Set");
    assert_eq!(result.evidence.as_deref(), Some("suffix '-chen' in 'kästchen'"));
}

#[test]
fn test_compound_markers() {
    assert_eq!(classify("Pfeil-Bogen"), Category::Compound);
    assert_eq!(classify("Messer und Gabel"), Category::Compound);
    assert_eq!(classify("Pfeil+Bogen"), Category::Compound);
    assert_eq!(classify("Knife and Fork"), Category::Compound);
}

#[test]
fn test_connective_must_be_whole_word() {
    // "und" inside a word is not a connective
    assert_eq!(classify("Hundefigur"), Category::Simple);
    assert_eq!(classify("Rundschild groß"), Category::Descriptive);
}

#[test]
fn test_material_object() {
    assert_eq!(classify("Holzschale"), Category::MaterialObject);
    assert_eq!(classify("Eisenbeil"), Category::MaterialObject);
    assert_eq!(classify("Gefäß aus BRONZE"), Category::MaterialObject);
}

#[test]
fn test_material_beats_cultural() {
    assert_eq!(classify("Chinesische Holzschale"), Category::MaterialObject);
}

#[test]
fn test_cultural_specific() {
    assert_eq!(classify("Kris"), Category::CulturalSpecific);
    assert_eq!(classify("Japanische Maske"), Category::CulturalSpecific);
    assert_eq!(classify("Kalebasse"), Category::CulturalSpecific);
}

#[test]
fn test_long_descriptive_by_length() {
    // 27 characters, two words
    let name = "Zeremonialschurz Frauenrock";
    assert_eq!(name.chars().count(), 27);
    assert_eq!(classify(name), Category::LongDescriptive);
}

#[test]
fn test_long_descriptive_by_word_count() {
    assert_eq!(classify("Figur mit zwei Köpfen"), Category::LongDescriptive);
}

#[test]
fn test_descriptive() {
    assert_eq!(classify("Kopfbedeckung Frau"), Category::Descriptive);
    assert_eq!(classify("Schurz für Männer"), Category::Descriptive);
}

#[test]
fn test_simple_and_unclassified_boundary() {
    let fifteen = "Kopfbedeckungen";
    assert_eq!(fifteen.chars().count(), 15);
    assert_eq!(classify(fifteen), Category::Simple);

    let sixteen = "Schmuckanhängern";
    assert_eq!(sixteen.chars().count(), 16);
    assert_eq!(classify(sixteen), Category::Unclassified);
}

#[test]
fn test_length_counts_characters_not_bytes() {
    // Umlauts are two bytes in UTF-8 but one character
    let name = "Schürzenüberwurf";
    assert_eq!(name.chars().count(), 16);
    assert_eq!(classify(name), Category::Unclassified);
    assert_eq!(classify("Prunkgürtel"), Category::Simple);
}

#[test]
fn test_classification_is_total_and_deterministic() {
    let names = [
        "Maske",
        "Kästchen-Set",
        "Chinesische Holzschale",
        "Pfeil und Bogen",
        "Kris",
        "Figur mit zwei Köpfen und Armen",
        "Kopfbedeckung Frau",
        "Schmuckanhängern",
        "",
        "   ",
    ];

    for name in names {
        let first = classify(name);
        for _ in 0..3 {
            assert_eq!(classify(name), first);
        }
        assert!(Category::ALL.contains(&first));
    }
}

#[test]
fn test_evidence_names_the_rule() {
    let result = classify_with_evidence("Chinesische Holzschale");
    assert_eq!(result.category, Category::MaterialObject);
    assert_eq!(result.evidence.as_deref(), Some("material 'holz'"));

    let result = classify_with_evidence("Schmuckanhängern");
    assert_eq!(result.category, Category::Unclassified);
    assert!(result.evidence.is_none());
}

#[test]
fn test_rule_order_matches_category_order() {
    let rule_order: Vec<Category> = rules::RULES.iter().map(|r| r.category).collect();
    assert_eq!(rule_order, Category::ALL[..7].to_vec());
}

#[test]
fn test_classify_records_preserves_order() {
    let records = vec![
        NameRecord::new("Maske", 300),
        NameRecord::new("Holzschale", 20),
    ];
    let categorized: Vec<_> = classify_records(&records).collect();
    assert_eq!(categorized[0].category, Category::Simple);
    assert_eq!(categorized[1].name, "Holzschale");
    assert_eq!(categorized[1].category, Category::MaterialObject);
}

#[test]
fn test_category_parse_roundtrip_names() {
    assert_eq!("material_object".parse::<Category>().unwrap(), Category::MaterialObject);
    assert_eq!("Long-Descriptive".parse::<Category>().unwrap(), Category::LongDescriptive);
    assert!("bogus".parse::<Category>().is_err());
}
