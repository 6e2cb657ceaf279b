//! Input discovery and loading shared by the commands.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::hierarchy::Thesaurus;
use crate::loader::{self, LoadReport};
use crate::models::{MappingTable, NameCensus};

/// Input paths given on the command line. Each one overrides `[input]`.
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub census: Option<PathBuf>,
    pub mapping: Option<PathBuf>,
    pub thesaurus: Option<PathBuf>,
    pub delimiter: Option<char>,
}

/// Effective configuration plus loaders for the three input tables.
#[derive(Debug, Clone)]
pub struct Inputs {
    config: Config,
}

impl Inputs {
    pub fn new(mut config: Config, overrides: InputOverrides) -> Self {
        let input = &mut config.input;
        if let Some(path) = overrides.census {
            input.census = Some(path);
        }
        if let Some(path) = overrides.mapping {
            input.mapping = Some(path);
        }
        if let Some(path) = overrides.thesaurus {
            input.thesaurus = Some(path);
        }
        if let Some(delimiter) = overrides.delimiter {
            input.delimiter = delimiter;
        }
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn has_census(&self) -> bool {
        self.config.input.census.is_some()
    }

    pub fn has_mapping(&self) -> bool {
        self.config.input.mapping.is_some()
    }

    pub fn census(&self) -> Result<NameCensus> {
        let path = required(self.config.input.census.as_deref(), "census", "--census")?;
        let (census, report) =
            loader::load_census(path, &self.config.columns.census, self.delimiter()?)?;
        announce_skips("census", path, &report);
        Ok(census)
    }

    pub fn mapping(&self) -> Result<MappingTable> {
        let path = required(self.config.input.mapping.as_deref(), "mapping", "--mapping")?;
        let (table, report) =
            loader::load_mapping(path, &self.config.columns.mapping, self.delimiter()?)?;
        announce_skips("mapping table", path, &report);
        Ok(table)
    }

    /// The mapping table, or an empty one when none is configured.
    pub fn mapping_or_empty(&self) -> Result<MappingTable> {
        if self.has_mapping() {
            self.mapping()
        } else {
            Ok(MappingTable::default())
        }
    }

    pub fn thesaurus(&self) -> Result<Thesaurus> {
        let path = required(self.config.input.thesaurus.as_deref(), "thesaurus", "--thesaurus")?;
        let (thesaurus, report) =
            loader::load_thesaurus(path, &self.config.columns.thesaurus, self.delimiter()?)?;
        announce_skips("thesaurus", path, &report);
        Ok(thesaurus)
    }

    fn delimiter(&self) -> Result<u8> {
        self.config.input.delimiter_byte()
    }
}

fn required<'a>(path: Option<&'a Path>, key: &str, flag: &str) -> Result<&'a Path> {
    match path {
        Some(path) => Ok(path),
        None => bail!("No {key} file given. Pass {flag} or set [input] {key} in the config."),
    }
}

/// Tell the user about skipped rows. Details are in the warn log.
fn announce_skips(table: &str, path: &Path, report: &LoadReport) {
    if report.is_clean() {
        return;
    }
    eprintln!(
        "{} Skipped {} of {} rows in {} ({})",
        "⚠".yellow(),
        report.skipped,
        report.loaded + report.skipped,
        table,
        path.display()
    );
}

/// Truncate a string to `max_chars`, adding an ellipsis when shortened.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = Config::default();
        config.input.census = Some(PathBuf::from("from-config.csv"));
        config.input.mapping = Some(PathBuf::from("mapping.csv"));

        let inputs = Inputs::new(
            config,
            InputOverrides {
                census: Some(PathBuf::from("from-flag.csv")),
                delimiter: Some(';'),
                ..Default::default()
            },
        );

        let input = &inputs.config().input;
        assert_eq!(input.census.as_deref(), Some(Path::new("from-flag.csv")));
        assert_eq!(input.mapping.as_deref(), Some(Path::new("mapping.csv")));
        assert_eq!(input.delimiter, ';');
        assert!(inputs.config().input.thesaurus.is_none());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let inputs = Inputs::new(Config::default(), InputOverrides::default());
        let err = inputs.thesaurus().unwrap_err();
        assert!(err.to_string().contains("--thesaurus"));
        assert!(inputs.mapping_or_empty().unwrap().is_empty());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Maske", 10), "Maske");
        assert_eq!(truncate("Schmuckanhänger", 8), "Schmuck…");
    }
}
