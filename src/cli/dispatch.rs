use anyhow::Result;
use museum_mapper::commands::common::Inputs;
use museum_mapper::commands::report::ReportOverrides;
use museum_mapper::commands::tree::TreeMode;
use museum_mapper::commands::{classify, export, match_cmd, report, resolve, search, tree};

use super::types::{Commands, SearchCommands};

pub fn dispatch(command: Commands, inputs: &Inputs) -> Result<()> {
    match command {
        Commands::Classify { names, evidence } => classify::execute(inputs, names, evidence),
        Commands::Resolve { names } => resolve::execute(inputs, names),
        Commands::Tree {
            code,
            depth_only,
            children,
            subtree: _,
        } => {
            let mode = if depth_only {
                TreeMode::DepthOnly
            } else if children {
                TreeMode::Children
            } else {
                TreeMode::Subtree
            };
            tree::execute(inputs, code, mode)
        }
        Commands::Search { command } => match command {
            SearchCommands::Term { pattern } => search::term(inputs, pattern),
            SearchCommands::Prefix { prefix } => search::prefix(inputs, prefix),
            SearchCommands::Variants { master_id } => search::variants(inputs, master_id),
            SearchCommands::Id { term_id } => search::id(inputs, term_id),
        },
        Commands::Match { names, threshold } => match_cmd::execute(inputs, names, threshold),
        Commands::Report {
            json,
            top,
            examples,
            review_cap,
            threshold,
        } => {
            let overrides = ReportOverrides {
                top_n: top,
                examples_per_category: examples,
                review_frequency_cap: review_cap,
                confidence_threshold: threshold,
            };
            report::execute(inputs, overrides, json)
        }
        Commands::Export {
            format,
            out,
            threshold,
        } => export::execute(inputs, format, out, threshold),
    }
}
