//! `museum-mapper export` - write per-name results to a file.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use super::common::Inputs;
use crate::export::{export_to_file, name_results, ExportFormat};

pub fn execute(
    inputs: &Inputs,
    format: ExportFormat,
    out: PathBuf,
    threshold: Option<u8>,
) -> Result<()> {
    let census = inputs.census()?;
    let mapping = inputs.mapping_or_empty()?;
    let thesaurus = inputs.thesaurus()?;
    let threshold = threshold.unwrap_or(inputs.config().report.confidence_threshold);

    let results = name_results(&census, &mapping, &thesaurus, threshold);
    export_to_file(&results, format, &out)?;

    println!(
        "{} Exported {} names to {} ({})",
        "✓".green(),
        results.len(),
        out.display().to_string().cyan(),
        format
    );
    Ok(())
}
