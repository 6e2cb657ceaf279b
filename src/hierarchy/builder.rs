//! One-shot construction of the thesaurus tree.

use std::collections::{HashMap, HashSet};

use super::code::validate_code;
use super::Thesaurus;
use crate::error::{CoreError, CoreResult};
use crate::models::ThesaurusNode;

/// Collects thesaurus nodes and checks the uniqueness invariants.
///
/// Queries are only available on the [`Thesaurus`] returned by [`build`], so a
/// half-built tree can never be navigated.
///
/// [`build`]: ThesaurusBuilder::build
#[derive(Debug, Default)]
pub struct ThesaurusBuilder {
    nodes: Vec<ThesaurusNode>,
    codes: HashSet<String>,
    term_ids: HashSet<String>,
}

impl ThesaurusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            codes: HashSet::with_capacity(capacity),
            term_ids: HashSet::with_capacity(capacity),
        }
    }

    /// Add a node. A rejected node leaves the builder unchanged.
    pub fn add(&mut self, node: ThesaurusNode) -> CoreResult<()> {
        validate_code(&node.code)?;

        if self.codes.contains(&node.code) {
            return Err(CoreError::DuplicateCode { code: node.code });
        }
        if self.term_ids.contains(&node.term_id) {
            return Err(CoreError::DuplicateTermId {
                term_id: node.term_id,
            });
        }

        self.codes.insert(node.code.clone());
        self.term_ids.insert(node.term_id.clone());
        self.nodes.push(node);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sort by code and build the lookup indexes.
    pub fn build(self) -> Thesaurus {
        let mut nodes = self.nodes;
        nodes.sort_by(|a, b| a.code.cmp(&b.code));

        let mut by_code = HashMap::with_capacity(nodes.len());
        let mut by_term_id = HashMap::with_capacity(nodes.len());
        let mut by_term: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_master: HashMap<String, Vec<usize>> = HashMap::new();
        let mut lower_terms = Vec::with_capacity(nodes.len());

        for (idx, node) in nodes.iter().enumerate() {
            let lower = node.term.to_lowercase();
            by_code.insert(node.code.clone(), idx);
            by_term_id.insert(node.term_id.clone(), idx);
            by_term.entry(lower.clone()).or_default().push(idx);
            by_master
                .entry(node.term_master_id.clone())
                .or_default()
                .push(idx);
            lower_terms.push(lower);
        }

        tracing::info!(
            nodes = nodes.len(),
            terms = by_term.len(),
            master_ids = by_master.len(),
            "thesaurus built"
        );

        Thesaurus {
            nodes,
            lower_terms,
            by_code,
            by_term_id,
            by_term,
            by_master,
        }
    }
}
