//! `museum-mapper resolve` - look names up in the cleanup table.

use anyhow::Result;
use colored::Colorize;

use super::common::Inputs;
use crate::error::CoreError;
use crate::resolve::{resolve, ResolutionOutcome};

pub fn execute(inputs: &Inputs, names: Vec<String>) -> Result<()> {
    let table = inputs.mapping()?;

    for name in &names {
        match resolve(name, &table) {
            Ok(ResolutionOutcome::Consolidated(target)) => {
                println!("{} {} → {}", "✓".green(), name, target.cyan());
            }
            Ok(ResolutionOutcome::Excluded) => {
                println!("{} {} {}", "✗".red(), name, "(excluded)".dimmed());
            }
            Ok(ResolutionOutcome::Unmapped) => {
                println!("{} {} {}", "○".white(), name, "(already canonical)".dimmed());
            }
            Err(CoreError::NotFound { .. }) => {
                println!("{} {} {}", "?".yellow(), name, "(no source data)".dimmed());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
