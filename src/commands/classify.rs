//! `museum-mapper classify` - categorize object names.

use anyhow::Result;
use colored::{ColoredString, Colorize};

use super::common::{truncate, Inputs};
use crate::classify::{classify_records, classify_with_evidence, Category};

fn category_label(category: Category) -> ColoredString {
    let text = category.to_string();
    match category {
        Category::Diminutive => text.magenta(),
        Category::Compound => text.cyan(),
        Category::MaterialObject => text.yellow(),
        Category::CulturalSpecific => text.blue(),
        Category::LongDescriptive | Category::Descriptive => text.normal(),
        Category::Simple => text.green(),
        Category::Unclassified => text.dimmed(),
    }
}

/// Classify the given names, or every census name when none are given.
pub fn execute(inputs: &Inputs, names: Vec<String>, evidence: bool) -> Result<()> {
    if names.is_empty() {
        let census = inputs.census()?;
        for named in classify_records(census.iter()) {
            println!(
                "{:40} {:>8} {}",
                truncate(&named.name, 40),
                named.frequency.to_string().dimmed(),
                category_label(named.category)
            );
        }
        return Ok(());
    }

    for name in &names {
        let classification = classify_with_evidence(name);
        print!(
            "{:40} {}",
            truncate(name, 40),
            category_label(classification.category)
        );
        match (&classification.evidence, evidence) {
            (Some(reason), true) => println!("  {}", reason.dimmed()),
            _ => println!(),
        }
    }

    Ok(())
}
