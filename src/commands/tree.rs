//! `museum-mapper tree` - navigate the thesaurus code tree.

use anyhow::Result;
use colored::Colorize;

use super::common::Inputs;
use crate::hierarchy::{depth, Thesaurus};
use crate::models::ThesaurusNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeMode {
    /// Only print the depth of the code
    DepthOnly,
    Children,
    Subtree,
}

pub(crate) fn format_node(node: &ThesaurusNode) -> String {
    let mut line = format!(
        "{}  {} {}",
        node.code.dimmed(),
        node.term.bold(),
        format!("[{} / {}]", node.term_id, node.term_master_id).dimmed()
    );
    if let Some(authority) = &node.external_authority_id {
        line.push_str(&format!(" {}", format!("AAT {authority}").cyan()));
    }
    line
}

/// Breadcrumb of the existing ancestors, root first.
fn breadcrumb(thesaurus: &Thesaurus, code: &str) -> Option<String> {
    let path: Vec<&str> = thesaurus
        .ancestors_of(code)
        .into_iter()
        .map(|n| n.term.as_str())
        .collect();
    (!path.is_empty()).then(|| path.join(" › "))
}

/// Indented lines for `code` and everything below it, in code order.
pub(crate) fn render_subtree(thesaurus: &Thesaurus, code: &str) -> Result<Vec<String>> {
    let base = depth(code)?;
    let mut lines = Vec::new();
    if let Some(node) = thesaurus.get(code) {
        lines.push(format_node(node));
    }
    for node in thesaurus.subtree_of(code) {
        let level = node.depth().saturating_sub(base);
        lines.push(format!("{}{}", "  ".repeat(level), format_node(node)));
    }
    Ok(lines)
}

pub fn execute(inputs: &Inputs, code: String, mode: TreeMode) -> Result<()> {
    let code_depth = depth(&code)?;
    if mode == TreeMode::DepthOnly {
        println!("{code}  depth {code_depth}");
        return Ok(());
    }

    let thesaurus = inputs.thesaurus()?;
    if let Some(path) = breadcrumb(&thesaurus, &code) {
        println!("{} {}", "↳".dimmed(), path.dimmed());
    }
    if thesaurus.get(&code).is_none() {
        println!("{} No thesaurus entry for {}", "ℹ".blue(), code);
    }

    match mode {
        TreeMode::Children => {
            if let Some(node) = thesaurus.get(&code) {
                println!("{}", format_node(node));
            }
            let mut count = 0;
            for child in thesaurus.children_of(&code) {
                println!("  {}", format_node(child));
                count += 1;
            }
            println!("\n{} {count} children", "→".dimmed());
        }
        TreeMode::Subtree => {
            let lines = render_subtree(&thesaurus, &code)?;
            for line in &lines {
                println!("{line}");
            }
        }
        TreeMode::DepthOnly => {}
    }

    Ok(())
}
