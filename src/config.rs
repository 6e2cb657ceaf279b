//! Optional `museum-mapper.toml` configuration.
//!
//! Every field has a default matching the census exports the tool was written
//! for, so a missing file or a partial file is fine.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::constants::{
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_EXAMPLES_PER_CATEGORY, DEFAULT_REVIEW_FREQUENCY_CAP,
    DEFAULT_TOP_N,
};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "museum-mapper.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub columns: ColumnsConfig,
    pub report: ReportConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsConfig {
    pub census: CensusColumns,
    pub mapping: MappingColumns,
    pub thesaurus: ThesaurusColumns,
}

/// Header names of the name census table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensusColumns {
    pub name: String,
    pub frequency: String,
}

impl Default for CensusColumns {
    fn default() -> Self {
        Self {
            name: "ObjectName".to_string(),
            frequency: "AnzahlvonObjectName".to_string(),
        }
    }
}

/// Header names of the cleanup table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingColumns {
    pub original: String,
    pub cleaned: String,
    pub frequency: String,
}

impl Default for MappingColumns {
    fn default() -> Self {
        Self {
            original: "ObjectName".to_string(),
            cleaned: "Begriff bereinigt".to_string(),
            frequency: "AnzahlvonObjectName".to_string(),
        }
    }
}

/// Header names of the thesaurus export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThesaurusColumns {
    pub code: String,
    pub term: String,
    pub term_id: String,
    pub term_master_id: String,
    /// Optional column; rows without it simply carry no authority link
    pub authority_id: String,
}

impl Default for ThesaurusColumns {
    fn default() -> Self {
        Self {
            code: "CN".to_string(),
            term: "term".to_string(),
            term_id: "TermID".to_string(),
            term_master_id: "TermMasterID".to_string(),
            authority_id: "AAT_ID".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub examples_per_category: usize,
    pub top_n: usize,
    /// Only names at or below this frequency are queued for matching
    pub review_frequency_cap: u64,
    pub confidence_threshold: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            examples_per_category: DEFAULT_EXAMPLES_PER_CATEGORY,
            top_n: DEFAULT_TOP_N,
            review_frequency_cap: DEFAULT_REVIEW_FREQUENCY_CAP,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub census: Option<PathBuf>,
    pub mapping: Option<PathBuf>,
    pub thesaurus: Option<PathBuf>,
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            census: None,
            mapping: None,
            thesaurus: None,
            delimiter: ',',
        }
    }
}

impl InputConfig {
    /// The delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!("CSV delimiter must be an ASCII character, got '{}'", self.delimiter);
        }
        Ok(self.delimiter as u8)
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `museum-mapper.toml` in the
    /// working directory is used when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.input.delimiter_byte()?;
        if config.report.confidence_threshold > 100 {
            bail!(
                "confidence_threshold must be between 0 and 100, got {}",
                config.report.confidence_threshold
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.columns.census.name, "ObjectName");
        assert_eq!(config.columns.mapping.cleaned, "Begriff bereinigt");
        assert_eq!(config.columns.thesaurus.code, "CN");
        assert_eq!(config.report.examples_per_category, 15);
        assert_eq!(config.report.review_frequency_cap, 12);
        assert_eq!(config.report.confidence_threshold, 80);
        assert_eq!(config.input.delimiter, ',');
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse(
            r#"
[report]
top_n = 10

[columns.census]
name = "Objektbezeichnung"

[input]
delimiter = ";"
thesaurus = "data/thesaurus.csv"
"#,
        )
        .unwrap();

        assert_eq!(config.report.top_n, 10);
        assert_eq!(config.report.examples_per_category, 15);
        assert_eq!(config.columns.census.name, "Objektbezeichnung");
        assert_eq!(config.columns.census.frequency, "AnzahlvonObjectName");
        assert_eq!(config.input.delimiter_byte().unwrap(), b';');
        assert_eq!(
            config.input.thesaurus.as_deref(),
            Some(Path::new("data/thesaurus.csv"))
        );
        assert!(config.input.census.is_none());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::parse("[input]\ndelimiter = \"§\"").is_err());
        assert!(Config::parse("[report]\nconfidence_threshold = 120").is_err());
        assert!(Config::parse("[report]\ntop_n = \"many\"").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "[report]\nconfidence_threshold = 90\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.report.confidence_threshold, 90);

        let missing = temp.path().join("missing.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }
}
