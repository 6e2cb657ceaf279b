//! `museum-mapper search` - term and code-prefix searches.

use anyhow::Result;
use colored::Colorize;

use super::common::Inputs;
use super::tree::format_node;
use crate::models::ThesaurusNode;

fn print_hits<'a>(hits: impl Iterator<Item = &'a ThesaurusNode>, what: &str) {
    let mut count = 0;
    for node in hits {
        println!("{}", format_node(node));
        count += 1;
    }
    if count == 0 {
        println!("{} No nodes match {}", "ℹ".blue(), what);
    } else {
        println!("\n{} {count} nodes", "→".dimmed());
    }
}

/// Case-insensitive substring search over terms.
pub fn term(inputs: &Inputs, pattern: String) -> Result<()> {
    let thesaurus = inputs.thesaurus()?;
    print_hits(
        thesaurus.find_by_term_substring(&pattern),
        &format!("'{pattern}'"),
    );
    Ok(())
}

/// Nodes sharing a term master id (synonyms and variants).
pub fn variants(inputs: &Inputs, master_id: String) -> Result<()> {
    let thesaurus = inputs.thesaurus()?;
    print_hits(
        thesaurus.variants_of(&master_id),
        &format!("master id {master_id}"),
    );
    Ok(())
}

/// Look up a single node by term id.
pub fn id(inputs: &Inputs, term_id: String) -> Result<()> {
    let thesaurus = inputs.thesaurus()?;
    match thesaurus.by_term_id(&term_id) {
        Some(node) => println!("{}", format_node(node)),
        None => println!("{} No node with term id {}", "ℹ".blue(), term_id),
    }
    Ok(())
}

/// Raw code prefix scan. `AUT.AAA.AA` also matches `AUT.AAA.AAC`.
pub fn prefix(inputs: &Inputs, prefix: String) -> Result<()> {
    let thesaurus = inputs.thesaurus()?;
    print_hits(
        thesaurus.find_by_code_prefix(&prefix),
        &format!("prefix {prefix}"),
    );
    Ok(())
}
