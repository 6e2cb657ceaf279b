//! Ordered rule table for object-name classification.
//!
//! Rules are evaluated top to bottom and the first match wins. Reordering
//! `RULES` changes real output.

use super::category::Category;
use super::NameFeatures;

/// German diminutive endings ("small/little").
pub const DIMINUTIVE_SUFFIXES: &[&str] = &["chen", "lein", "erl"];

/// Connective words that join two object names.
pub const CONNECTIVES: &[&str] = &["und", "and"];

/// Material names, matched as lowercase substrings.
pub const MATERIAL_KEYWORDS: &[&str] = &[
    "holz", "metall", "glas", "keramik", "ton", "eisen", "blech", "stein", "bronze", "silber",
    "gold",
];

/// Cultures, regions and named artifact types, matched as lowercase substrings.
pub const CULTURAL_KEYWORDS: &[&str] = &[
    "mao",
    "chinesisch",
    "japanisch",
    "indisch",
    "afrikanisch",
    "kris",
    "kalebasse",
];

/// Names longer than this many characters are long descriptive.
pub const LONG_NAME_CHARS: usize = 25;

/// Names with more words than this are long descriptive.
pub const LONG_NAME_WORDS: usize = 3;

/// Longest single word still counted as a simple name.
pub const SIMPLE_NAME_MAX_CHARS: usize = 15;

/// A single classification rule. `test` returns the matching evidence.
pub struct Rule {
    pub category: Category,
    pub test: fn(&NameFeatures) -> Option<String>,
}

/// Rules in precedence order. `Unclassified` is the fallback and has no rule.
pub const RULES: &[Rule] = &[
    Rule {
        category: Category::Diminutive,
        test: diminutive,
    },
    Rule {
        category: Category::Compound,
        test: compound,
    },
    Rule {
        category: Category::MaterialObject,
        test: material,
    },
    Rule {
        category: Category::CulturalSpecific,
        test: cultural,
    },
    Rule {
        category: Category::LongDescriptive,
        test: long_descriptive,
    },
    Rule {
        category: Category::Descriptive,
        test: descriptive,
    },
    Rule {
        category: Category::Simple,
        test: simple,
    },
];

fn diminutive(features: &NameFeatures) -> Option<String> {
    // The last component ends where the name ends, so this covers the whole name too
    features.components.iter().find_map(|component| {
        DIMINUTIVE_SUFFIXES
            .iter()
            .find(|suffix| {
                component.ends_with(*suffix)
                    && component.chars().count() > suffix.chars().count()
            })
            .map(|suffix| format!("suffix '-{suffix}' in '{component}'"))
    })
}

fn compound(features: &NameFeatures) -> Option<String> {
    if features.lowercase.contains('-') {
        return Some("hyphen".to_string());
    }
    if features.lowercase.contains('+') {
        return Some("'+'".to_string());
    }
    features
        .words
        .iter()
        .find(|word| CONNECTIVES.contains(&word.as_str()))
        .map(|word| format!("connective '{word}'"))
}

fn material(features: &NameFeatures) -> Option<String> {
    MATERIAL_KEYWORDS
        .iter()
        .find(|keyword| features.lowercase.contains(*keyword))
        .map(|keyword| format!("material '{keyword}'"))
}

fn cultural(features: &NameFeatures) -> Option<String> {
    CULTURAL_KEYWORDS
        .iter()
        .find(|keyword| features.lowercase.contains(*keyword))
        .map(|keyword| format!("cultural keyword '{keyword}'"))
}

fn long_descriptive(features: &NameFeatures) -> Option<String> {
    if features.char_len > LONG_NAME_CHARS {
        Some(format!("{} characters", features.char_len))
    } else if features.word_count > LONG_NAME_WORDS {
        Some(format!("{} words", features.word_count))
    } else {
        None
    }
}

fn descriptive(features: &NameFeatures) -> Option<String> {
    (2..=3)
        .contains(&features.word_count)
        .then(|| format!("{} words", features.word_count))
}

fn simple(features: &NameFeatures) -> Option<String> {
    (features.word_count == 1 && features.char_len <= SIMPLE_NAME_MAX_CHARS)
        .then(|| format!("single word, {} characters", features.char_len))
}
