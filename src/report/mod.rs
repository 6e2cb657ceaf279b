//! Collection report.
//!
//! A stateless fold over the public classifier, resolver, navigator and
//! matcher calls. Nothing here reaches into their internals.

mod stats;


pub use stats::{frequency_bands, BandCount, CensusStats, NamingPatterns};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::classify::{classify, Category};
use crate::config::ReportConfig;
use crate::hierarchy::Thesaurus;
use crate::matcher::{MatchStatus, Matcher};
use crate::models::{MappingTable, NameCensus};
use crate::resolve::{resolve, ResolutionOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub examples_per_category: usize,
    pub top_n: usize,
    pub review_frequency_cap: u64,
    pub confidence_threshold: u8,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from(&ReportConfig::default())
    }
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            examples_per_category: config.examples_per_category,
            top_n: config.top_n,
            review_frequency_cap: config.review_frequency_cap,
            confidence_threshold: config.confidence_threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub names: usize,
    pub objects: u64,
    pub examples: Vec<String>,
}

/// Resolution outcomes over the census names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingSummary {
    pub table_entries: usize,
    pub consolidated: usize,
    pub excluded: usize,
    pub unmapped: usize,
    /// Census names with no row in the cleanup table
    pub no_source_data: usize,
    /// Distinct standard terms that names consolidate into
    pub distinct_targets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThesaurusStats {
    pub nodes: usize,
    pub roots: usize,
    pub depth_histogram: BTreeMap<usize, usize>,
    pub mean_depth: f64,
    pub unique_master_ids: usize,
    pub authority_linked: usize,
}

impl ThesaurusStats {
    pub fn from_thesaurus(thesaurus: &Thesaurus) -> Self {
        Self {
            nodes: thesaurus.len(),
            roots: thesaurus.roots().count(),
            depth_histogram: thesaurus.depth_histogram(),
            mean_depth: thesaurus.mean_depth(),
            unique_master_ids: thesaurus.unique_master_ids(),
            authority_linked: thesaurus.authority_linked(),
        }
    }
}

/// Matcher outcomes for the low-frequency names queued for review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub frequency_cap: u64,
    pub queued: usize,
    pub accepted: usize,
    pub needs_review: usize,
    pub unmatched: usize,
    pub ignored: usize,
    pub by_method: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub categories: Vec<CategorySummary>,
    pub mapping: MappingSummary,
    pub census: CensusStats,
    pub frequency_bands: Vec<BandCount>,
    pub naming_patterns: NamingPatterns,
    pub thesaurus: ThesaurusStats,
    pub review: ReviewSummary,
}

impl Report {
    pub fn build(
        census: &NameCensus,
        mapping: &MappingTable,
        thesaurus: &Thesaurus,
        options: &ReportOptions,
    ) -> Self {
        let report = Self {
            generated_at: Utc::now(),
            categories: summarize_categories(census, options.examples_per_category),
            mapping: summarize_mapping(census, mapping),
            census: CensusStats::from_census(census, options.top_n),
            frequency_bands: frequency_bands(census),
            naming_patterns: NamingPatterns::from_names(census.iter().map(|r| r.name.as_str())),
            thesaurus: ThesaurusStats::from_thesaurus(thesaurus),
            review: summarize_review(census, mapping, thesaurus, options),
        };
        tracing::info!(
            names = report.census.unique_names,
            queued = report.review.queued,
            "Built collection report"
        );
        report
    }

    pub fn category(&self, category: Category) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// One summary per category in rule order, empty categories included.
fn summarize_categories(census: &NameCensus, examples: usize) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Category::ALL
        .iter()
        .map(|&category| CategorySummary {
            category,
            names: 0,
            objects: 0,
            examples: Vec::new(),
        })
        .collect();

    for record in census.iter() {
        let category = classify(&record.name);
        let Some(summary) = summaries.iter_mut().find(|s| s.category == category) else {
            continue;
        };
        summary.names += 1;
        summary.objects += record.frequency;
        if summary.examples.len() < examples {
            summary.examples.push(record.name.clone());
        }
    }

    summaries
}

fn summarize_mapping(census: &NameCensus, mapping: &MappingTable) -> MappingSummary {
    let mut summary = MappingSummary {
        table_entries: mapping.len(),
        ..Default::default()
    };
    let mut targets = HashSet::new();

    for record in census.iter() {
        match resolve(&record.name, mapping) {
            Ok(ResolutionOutcome::Consolidated(target)) => {
                summary.consolidated += 1;
                targets.insert(target);
            }
            Ok(ResolutionOutcome::Excluded) => summary.excluded += 1,
            Ok(ResolutionOutcome::Unmapped) => summary.unmapped += 1,
            // Only NotFound: a name the cleanup never covered
            Err(_) => summary.no_source_data += 1,
        }
    }

    summary.distinct_targets = targets.len();
    summary
}

fn summarize_review(
    census: &NameCensus,
    mapping: &MappingTable,
    thesaurus: &Thesaurus,
    options: &ReportOptions,
) -> ReviewSummary {
    let matcher = Matcher::new(thesaurus)
        .with_mapping(mapping)
        .with_threshold(options.confidence_threshold);
    let mut summary = ReviewSummary {
        frequency_cap: options.review_frequency_cap,
        ..Default::default()
    };

    let queued = census
        .iter()
        .filter(|r| r.frequency <= options.review_frequency_cap);
    for record in queued {
        let suggestion = matcher.suggest(&record.name);
        summary.queued += 1;
        match suggestion.status {
            MatchStatus::Accepted => summary.accepted += 1,
            MatchStatus::NeedsReview => summary.needs_review += 1,
            MatchStatus::Unmatched => summary.unmatched += 1,
            MatchStatus::Ignored => summary.ignored += 1,
        }
        *summary
            .by_method
            .entry(suggestion.method.to_string())
            .or_default() += 1;
    }

    summary
}
