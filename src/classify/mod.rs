//! Rule-based classification of raw object names.
//!
//! Every name maps to exactly one [`Category`]. The rules in [`rules::RULES`] are
//! checked in a fixed order and the first match wins; a name matching none of
//! them is `Unclassified`. Matching is case-insensitive and the function is pure,
//! so names can be classified in any order or in parallel.

pub mod category;
pub mod rules;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::models::NameRecord;

pub use category::Category;

/// Precomputed views of a name shared by all rules.
#[derive(Debug, Clone)]
pub struct NameFeatures {
    /// Trimmed, lowercased name
    pub lowercase: String,
    /// Whitespace separated words (lowercase)
    pub words: Vec<String>,
    /// Parts between `-` and `+` (lowercase, trimmed); `Kästchen-Set` gives
    /// `kästchen`, `set`. Whitespace does not split, so a name without
    /// connectors is a single component.
    pub components: Vec<String>,
    pub word_count: usize,
    /// Length in characters, not bytes
    pub char_len: usize,
}

impl NameFeatures {
    pub fn new(name: &str) -> Self {
        let trimmed = name.trim();
        let lowercase = trimmed.to_lowercase();
        let words: Vec<String> = lowercase.split_whitespace().map(str::to_string).collect();
        let components = lowercase
            .split(['-', '+'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            word_count: words.len(),
            char_len: trimmed.chars().count(),
            lowercase,
            words,
            components,
        }
    }
}

/// Category plus the evidence of the rule that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

/// A census record with its category, as handed to reports and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizedName {
    pub name: String,
    pub frequency: u64,
    pub category: Category,
}

/// Classify a raw object name.
pub fn classify(name: &str) -> Category {
    classify_with_evidence(name).category
}

/// Classify a raw object name and report why.
pub fn classify_with_evidence(name: &str) -> Classification {
    let features = NameFeatures::new(name);

    for rule in rules::RULES {
        if let Some(evidence) = (rule.test)(&features) {
            return Classification {
                category: rule.category,
                evidence: Some(evidence),
            };
        }
    }

    Classification {
        category: Category::Unclassified,
        evidence: None,
    }
}

/// Classify census records lazily, preserving their order.
pub fn classify_records<'a>(
    records: impl IntoIterator<Item = &'a NameRecord> + 'a,
) -> impl Iterator<Item = CategorizedName> + 'a {
    records.into_iter().map(|record| CategorizedName {
        name: record.name.clone(),
        frequency: record.frequency,
        category: classify(&record.name),
    })
}
