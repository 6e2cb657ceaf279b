//! `museum-mapper match` - thesaurus suggestions for object names.

use anyhow::Result;
use colored::{ColoredString, Colorize};

use super::common::Inputs;
use crate::matcher::{MatchStatus, MatchSuggestion, Matcher};

fn status_indicator(status: MatchStatus) -> ColoredString {
    match status {
        MatchStatus::Accepted => "✓".green().bold(),
        MatchStatus::NeedsReview => "?".yellow().bold(),
        MatchStatus::Unmatched => "✗".red().bold(),
        MatchStatus::Ignored => "○".white().dimmed(),
    }
}

fn print_suggestion(suggestion: &MatchSuggestion) {
    let target = match (&suggestion.term, &suggestion.code) {
        (Some(term), Some(code)) => format!("{} {}", term.cyan(), code.dimmed()),
        (Some(term), None) => term.cyan().to_string(),
        _ => "-".dimmed().to_string(),
    };
    println!(
        "{} {} → {} {}",
        status_indicator(suggestion.status),
        suggestion.name,
        target,
        format!("({}%, {})", suggestion.confidence, suggestion.method).dimmed()
    );
    println!("    {}", suggestion.reasoning.dimmed());
}

/// Suggest thesaurus entries. The cleanup table is consulted when configured.
pub fn execute(inputs: &Inputs, names: Vec<String>, threshold: Option<u8>) -> Result<()> {
    let thesaurus = inputs.thesaurus()?;
    let mapping = inputs.mapping_or_empty()?;
    let threshold = threshold.unwrap_or(inputs.config().report.confidence_threshold);

    let matcher = Matcher::new(&thesaurus)
        .with_mapping(&mapping)
        .with_threshold(threshold);

    for name in &names {
        print_suggestion(&matcher.suggest(name));
    }

    Ok(())
}
