//! Deterministic thesaurus matcher.
//!
//! Suggests a thesaurus entry for a raw object name by walking a fixed cascade:
//! administrative notes, the cleanup table, exact term, diminutive stem,
//! material-stripped term, then an object keyword. The first step that finds a
//! term wins and sets the confidence.

pub mod normalize;

use crate::hierarchy::Thesaurus;
use crate::models::constants::{confidence, DEFAULT_CONFIDENCE_THRESHOLD};
use crate::models::{MappingTable, ThesaurusNode};
use crate::resolve::{resolve_or_none, ResolutionOutcome};
use anyhow::bail;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub use normalize::{
    extract_keyword, fold_umlauts, is_administrative_note, strip_diminutive, strip_material,
};

/// Review state of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Confidence at or above the acceptance threshold
    Accepted,
    NeedsReview,
    Unmatched,
    /// Administrative notes and excluded names
    Ignored,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Accepted => write!(f, "accepted"),
            MatchStatus::NeedsReview => write!(f, "needs_review"),
            MatchStatus::Unmatched => write!(f, "unmatched"),
            MatchStatus::Ignored => write!(f, "ignored"),
        }
    }
}

impl FromStr for MatchStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "accepted" => Ok(MatchStatus::Accepted),
            "needs_review" => Ok(MatchStatus::NeedsReview),
            "unmatched" => Ok(MatchStatus::Unmatched),
            "ignored" => Ok(MatchStatus::Ignored),
            _ => bail!("Unknown match status: {s}"),
        }
    }
}

/// Cascade step that produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    AdministrativeNote,
    Excluded,
    Reference,
    Exact,
    Diminutive,
    Material,
    Keyword,
    None,
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchMethod::AdministrativeNote => "administrative_note",
            MatchMethod::Excluded => "excluded",
            MatchMethod::Reference => "reference",
            MatchMethod::Exact => "exact",
            MatchMethod::Diminutive => "diminutive",
            MatchMethod::Material => "material",
            MatchMethod::Keyword => "keyword",
            MatchMethod::None => "none",
        };
        f.write_str(label)
    }
}

/// A thesaurus suggestion for one raw name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSuggestion {
    pub name: String,
    pub term: Option<String>,
    pub code: Option<String>,
    pub term_id: Option<String>,
    pub term_master_id: Option<String>,
    pub confidence: u8,
    pub status: MatchStatus,
    pub method: MatchMethod,
    pub reasoning: String,
}

impl MatchSuggestion {
    fn ignored(name: &str, method: MatchMethod, reasoning: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            term: None,
            code: None,
            term_id: None,
            term_master_id: None,
            confidence: 0,
            status: MatchStatus::Ignored,
            method,
            reasoning: reasoning.into(),
        }
    }

    fn unmatched(name: &str) -> Self {
        Self {
            status: MatchStatus::Unmatched,
            ..Self::ignored(name, MatchMethod::None, "no thesaurus term found")
        }
    }
}

/// Runs the matching cascade against one thesaurus and an optional cleanup table.
pub struct Matcher<'a> {
    thesaurus: &'a Thesaurus,
    mapping: Option<&'a MappingTable>,
    threshold: u8,
}

impl<'a> Matcher<'a> {
    pub fn new(thesaurus: &'a Thesaurus) -> Self {
        Self {
            thesaurus,
            mapping: None,
            threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    pub fn with_mapping(mut self, mapping: &'a MappingTable) -> Self {
        self.mapping = Some(mapping);
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Suggest a thesaurus entry for `name`.
    pub fn suggest(&self, name: &str) -> MatchSuggestion {
        if is_administrative_note(name) {
            return MatchSuggestion::ignored(
                name,
                MatchMethod::AdministrativeNote,
                "administrative note, not an object name",
            );
        }

        if let Some(mapping) = self.mapping {
            match resolve_or_none(name, mapping) {
                Some(ResolutionOutcome::Excluded) => {
                    return MatchSuggestion::ignored(
                        name,
                        MatchMethod::Excluded,
                        "excluded by the cleanup table",
                    );
                }
                Some(ResolutionOutcome::Consolidated(target)) => {
                    let node = self.lookup(&target);
                    let reasoning = match node {
                        Some(_) => format!("cleanup table maps to '{target}'"),
                        None => format!("cleanup table maps to '{target}' (not in thesaurus)"),
                    };
                    return self.matched(
                        name,
                        &target,
                        node,
                        confidence::REFERENCE,
                        MatchMethod::Reference,
                        reasoning,
                    );
                }
                Some(ResolutionOutcome::Unmapped) | None => {}
            }
        }

        let normalized = normalize::normalize(name);
        if let Some(node) = self.lookup(&normalized) {
            return self.matched(
                name,
                &node.term,
                Some(node),
                confidence::EXACT,
                MatchMethod::Exact,
                "exact thesaurus term".to_string(),
            );
        }

        if let Some((stem, suffix)) = strip_diminutive(&normalized) {
            if let Some(node) = self.lookup(&stem) {
                return self.matched(
                    name,
                    &node.term,
                    Some(node),
                    confidence::DIMINUTIVE,
                    MatchMethod::Diminutive,
                    format!("diminutive '-{suffix}' removed"),
                );
            }
        }

        if let Some((rest, material)) = strip_material(&normalized) {
            if let Some(node) = self.lookup(&rest) {
                return self.matched(
                    name,
                    &node.term,
                    Some(node),
                    confidence::MATERIAL,
                    MatchMethod::Material,
                    format!("material '{material}' removed"),
                );
            }
        }

        if let Some(keyword) = extract_keyword(&normalized) {
            if let Some(node) = self.lookup(keyword) {
                return self.matched(
                    name,
                    &node.term,
                    Some(node),
                    confidence::KEYWORD,
                    MatchMethod::Keyword,
                    format!("keyword '{keyword}' extracted"),
                );
            }
        }

        tracing::debug!(name, "No thesaurus match");
        MatchSuggestion::unmatched(name)
    }

    /// First thesaurus node whose term equals `term`, ignoring case.
    fn lookup(&self, term: &str) -> Option<&'a ThesaurusNode> {
        self.thesaurus.find_by_term(term).next()
    }

    fn matched(
        &self,
        name: &str,
        term: &str,
        node: Option<&ThesaurusNode>,
        confidence: u8,
        method: MatchMethod,
        reasoning: String,
    ) -> MatchSuggestion {
        let status = if confidence >= self.threshold {
            MatchStatus::Accepted
        } else {
            MatchStatus::NeedsReview
        };
        MatchSuggestion {
            name: name.to_string(),
            term: Some(term.to_string()),
            code: node.map(|n| n.code.clone()),
            term_id: node.map(|n| n.term_id.clone()),
            term_master_id: node.map(|n| n.term_master_id.clone()),
            confidence,
            status,
            method,
            reasoning,
        }
    }
}
