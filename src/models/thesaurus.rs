//! Controlled-vocabulary thesaurus entries.

use serde::{Deserialize, Serialize};

/// A single term in the thesaurus code tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThesaurusNode {
    /// Dotted hierarchical code, e.g. `AUT.AAA.AAC`. Globally unique.
    pub code: String,
    /// Display term. Not unique: several nodes may share a term.
    pub term: String,
    /// Globally unique term identifier.
    pub term_id: String,
    /// Synonym/variant group. Unrelated to tree position.
    pub term_master_id: String,
    /// Optional link into an external authority vocabulary (e.g. AAT).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_authority_id: Option<String>,
}

impl ThesaurusNode {
    pub fn new(
        code: impl Into<String>,
        term: impl Into<String>,
        term_id: impl Into<String>,
        term_master_id: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            term: term.into(),
            term_id: term_id.into(),
            term_master_id: term_master_id.into(),
            external_authority_id: None,
        }
    }

    pub fn with_authority(mut self, id: impl Into<String>) -> Self {
        self.external_authority_id = Some(id.into());
        self
    }

    /// Number of code segments. Codes are validated when the tree is built.
    pub fn depth(&self) -> usize {
        self.code.split(super::constants::CODE_SEPARATOR).count()
    }
}
