//! Per-name result export as JSON or CSV.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tempfile::NamedTempFile;

use crate::classify::{classify, Category};
use crate::hierarchy::Thesaurus;
use crate::matcher::{MatchMethod, MatchStatus, Matcher};
use crate::models::{MappingTable, NameCensus};
use crate::resolve::{resolve_or_none, ResolutionOutcome};

/// Cleanup-table verdict for one census name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Consolidated,
    Excluded,
    Unmapped,
    /// The name has no row in the cleanup table
    NoSourceData,
}

impl From<Option<&ResolutionOutcome>> for Resolution {
    fn from(outcome: Option<&ResolutionOutcome>) -> Self {
        match outcome {
            Some(ResolutionOutcome::Consolidated(_)) => Resolution::Consolidated,
            Some(ResolutionOutcome::Excluded) => Resolution::Excluded,
            Some(ResolutionOutcome::Unmapped) => Resolution::Unmapped,
            None => Resolution::NoSourceData,
        }
    }
}

/// Everything known about one census name, flattened for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameResult {
    pub name: String,
    pub frequency: u64,
    pub category: Category,
    pub resolution: Resolution,
    /// Term the name ends up as; the name itself when already canonical
    pub resolved_term: Option<String>,
    pub thesaurus_term: Option<String>,
    pub code: Option<String>,
    pub term_id: Option<String>,
    pub term_master_id: Option<String>,
    pub confidence: u8,
    pub status: MatchStatus,
    pub method: MatchMethod,
    pub reasoning: String,
}

/// Classify, resolve and match every census name, in census order.
pub fn name_results(
    census: &NameCensus,
    mapping: &MappingTable,
    thesaurus: &Thesaurus,
    confidence_threshold: u8,
) -> Vec<NameResult> {
    let matcher = Matcher::new(thesaurus)
        .with_mapping(mapping)
        .with_threshold(confidence_threshold);

    census
        .iter()
        .map(|record| {
            let outcome = resolve_or_none(&record.name, mapping);
            let resolved_term = outcome
                .as_ref()
                .and_then(|o| o.canonical_term(&record.name))
                .map(str::to_string);
            let suggestion = matcher.suggest(&record.name);
            NameResult {
                name: record.name.clone(),
                frequency: record.frequency,
                category: classify(&record.name),
                resolution: Resolution::from(outcome.as_ref()),
                resolved_term,
                thesaurus_term: suggestion.term,
                code: suggestion.code,
                term_id: suggestion.term_id,
                term_master_id: suggestion.term_master_id,
                confidence: suggestion.confidence,
                status: suggestion.status,
                method: suggestion.method,
                reasoning: suggestion.reasoning,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => bail!("Unknown export format: {s} (expected json or csv)"),
        }
    }
}

impl ExportFormat {
    pub fn write<W: Write>(&self, results: &[NameResult], writer: W) -> Result<()> {
        match self {
            ExportFormat::Json => export_json(results, writer),
            ExportFormat::Csv => export_csv(results, writer),
        }
    }
}

pub fn export_json<W: Write>(results: &[NameResult], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, results).context("Failed to serialize results")?;
    writeln!(writer)?;
    Ok(())
}

/// One row per name; empty cells for missing values.
pub fn export_csv<W: Write>(results: &[NameResult], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for result in results {
        csv.serialize(result)
            .with_context(|| format!("Failed to write CSV row for '{}'", result.name))?;
    }
    csv.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Write `results` to `path`, replacing any existing file only once the
/// new content is complete.
pub fn export_to_file(results: &[NameResult], format: ExportFormat, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staging = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    format.write(results, &mut staging)?;
    staging
        .as_file()
        .sync_all()
        .context("Failed to sync export to disk")?;
    staging
        .persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = results.len(), %format, "Exported results");
    Ok(())
}
