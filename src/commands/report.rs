//! `museum-mapper report` - collection report on the console or as JSON.

use anyhow::{Context, Result};
use colored::Colorize;

use super::common::{truncate, Inputs};
use crate::report::{Report, ReportOptions};

/// Command-line overrides for `[report]`.
#[derive(Debug, Clone, Default)]
pub struct ReportOverrides {
    pub top_n: Option<usize>,
    pub examples_per_category: Option<usize>,
    pub review_frequency_cap: Option<u64>,
    pub confidence_threshold: Option<u8>,
}

pub(crate) fn options(inputs: &Inputs, overrides: &ReportOverrides) -> ReportOptions {
    let mut options = ReportOptions::from(&inputs.config().report);
    if let Some(top_n) = overrides.top_n {
        options.top_n = top_n;
    }
    if let Some(examples) = overrides.examples_per_category {
        options.examples_per_category = examples;
    }
    if let Some(cap) = overrides.review_frequency_cap {
        options.review_frequency_cap = cap;
    }
    if let Some(threshold) = overrides.confidence_threshold {
        options.confidence_threshold = threshold;
    }
    options
}

pub fn execute(inputs: &Inputs, overrides: ReportOverrides, json: bool) -> Result<()> {
    let census = inputs.census()?;
    let mapping = inputs.mapping_or_empty()?;
    let thesaurus = inputs.thesaurus()?;

    let report = Report::build(&census, &mapping, &thesaurus, &options(inputs, &overrides));

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{out}");
    } else {
        display_report(&report);
    }
    Ok(())
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

fn section(title: &str) {
    println!("\n{}", title.bold());
    println!("{}", "─".repeat(60));
}

pub fn display_report(report: &Report) {
    let census = &report.census;
    println!(
        "{} {}",
        "Collection report".bold(),
        report
            .generated_at
            .format("%Y-%m-%d %H:%M UTC")
            .to_string()
            .dimmed()
    );

    section("Census");
    println!("  Unique names      {}", census.unique_names);
    println!("  Catalogued objects {}", census.total_objects);
    println!(
        "  Frequency         mean {:.1}, median {:.1}",
        census.mean_frequency, census.median_frequency
    );
    println!(
        "  Names seen once   {} ({:.1}%)",
        census.singletons,
        percent(census.singletons, census.unique_names)
    );
    println!("  Names ≥10 / ≥100  {} / {}", census.at_least_10, census.at_least_100);

    section("Frequency bands");
    for band in &report.frequency_bands {
        println!(
            "  {:>9}  {:>6} names  {:>8} objects",
            band.label, band.names, band.objects
        );
    }

    section("Most frequent names");
    for (rank, record) in census.top.iter().enumerate() {
        println!(
            "  {:>3}. {:40} {:>8}",
            rank + 1,
            truncate(&record.name, 40),
            record.frequency
        );
    }

    section("Categories");
    for summary in &report.categories {
        println!(
            "  {:28} {:>6} names  {:>8} objects",
            summary.category.label().bold(),
            summary.names,
            summary.objects
        );
        if !summary.examples.is_empty() {
            println!("      {}", summary.examples.join(", ").dimmed());
        }
    }

    let patterns = &report.naming_patterns;
    section("Naming patterns");
    println!("  Hyphenated        {}", patterns.hyphen);
    println!("  With comma        {}", patterns.comma);
    println!("  Multiple words    {}", patterns.multiple_words);
    println!("  Single word       {}", patterns.single_word);
    println!("  Contains digits   {}", patterns.digits);
    println!("  Capitalized       {}", patterns.capitalized);

    let mapping = &report.mapping;
    section("Cleanup table");
    println!("  Table entries     {}", mapping.table_entries);
    println!(
        "  {} Consolidated    {} into {} terms",
        "✓".green(),
        mapping.consolidated,
        mapping.distinct_targets
    );
    println!("  {} Excluded        {}", "✗".red(), mapping.excluded);
    println!("  {} Canonical       {}", "○".white(), mapping.unmapped);
    println!("  {} No source data  {}", "?".yellow(), mapping.no_source_data);

    let thesaurus = &report.thesaurus;
    section("Thesaurus");
    println!("  Nodes             {}", thesaurus.nodes);
    println!("  Roots             {}", thesaurus.roots);
    println!("  Mean depth        {:.2}", thesaurus.mean_depth);
    println!("  Term master ids   {}", thesaurus.unique_master_ids);
    println!("  Authority links   {}", thesaurus.authority_linked);
    for (depth, count) in &thesaurus.depth_histogram {
        println!("    depth {depth:>2}  {count}");
    }

    let review = &report.review;
    section(&format!(
        "Thesaurus matching (frequency ≤ {})",
        review.frequency_cap
    ));
    println!("  Queued            {}", review.queued);
    println!(
        "  {} Accepted        {} ({:.1}%)",
        "✓".green(),
        review.accepted,
        percent(review.accepted, review.queued)
    );
    println!("  {} Needs review    {}", "?".yellow(), review.needs_review);
    println!("  {} Unmatched       {}", "✗".red(), review.unmatched);
    println!("  {} Ignored         {}", "○".white(), review.ignored);
    for (method, count) in &review.by_method {
        println!("    {method:20} {count}");
    }
}
