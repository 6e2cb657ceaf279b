//! Navigation of the thesaurus code tree.
//!
//! Nodes are kept sorted by code. Every code that starts with a given string
//! sits in one contiguous run of that order, so subtree and prefix queries are a
//! binary search plus a scan of the matches. Results come back in code order and
//! are the same sets a linear scan over the source rows would produce.
//!
//! Two prefix notions exist and must not be confused:
//! - [`Thesaurus::subtree_of`] and [`code::is_ancestor`] respect segment
//!   boundaries: `AUT.AAA.AA` is not above `AUT.AAA.AAC`.
//! - [`Thesaurus::find_by_code_prefix`] is a raw string prefix for broad scans:
//!   `AUT.AAA.AA` matches `AUT.AAA.AAC` and everything below it.

pub mod builder;
pub mod code;


use std::collections::{BTreeMap, HashMap};

use crate::models::constants::CODE_SEPARATOR;
use crate::models::ThesaurusNode;

pub use builder::ThesaurusBuilder;
pub use code::{ancestor_codes, depth, is_ancestor, parent_code, validate_code};

/// Immutable, indexed thesaurus. Built once through [`ThesaurusBuilder`].
#[derive(Debug, Clone)]
pub struct Thesaurus {
    nodes: Vec<ThesaurusNode>,
    /// Lowercased terms, parallel to `nodes`
    lower_terms: Vec<String>,
    by_code: HashMap<String, usize>,
    by_term_id: HashMap<String, usize>,
    by_term: HashMap<String, Vec<usize>>,
    by_master: HashMap<String, Vec<usize>>,
}

/// Nodes whose code starts with a fixed string, in code order.
#[derive(Debug, Clone)]
pub struct PrefixIter<'a> {
    nodes: std::slice::Iter<'a, ThesaurusNode>,
    prefix: String,
}

impl<'a> Iterator for PrefixIter<'a> {
    type Item = &'a ThesaurusNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        if node.code.starts_with(&self.prefix) {
            Some(node)
        } else {
            // Sorted order: the first miss ends the run
            self.nodes = Default::default();
            None
        }
    }
}

impl Thesaurus {
    /// Build from nodes, collecting the ones rejected by the builder.
    pub fn from_nodes(
        nodes: impl IntoIterator<Item = ThesaurusNode>,
    ) -> (Self, Vec<(ThesaurusNode, crate::error::CoreError)>) {
        let nodes = nodes.into_iter();
        let mut builder = ThesaurusBuilder::with_capacity(nodes.size_hint().0);
        let mut rejected = Vec::new();

        for node in nodes {
            if let Err(err) = builder.add(node.clone()) {
                rejected.push((node, err));
            }
        }

        (builder.build(), rejected)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in code order.
    pub fn nodes(&self) -> impl Iterator<Item = &ThesaurusNode> + '_ {
        self.nodes.iter()
    }

    pub fn get(&self, code: &str) -> Option<&ThesaurusNode> {
        self.by_code.get(code).map(|&idx| &self.nodes[idx])
    }

    pub fn by_term_id(&self, term_id: &str) -> Option<&ThesaurusNode> {
        self.by_term_id.get(term_id).map(|&idx| &self.nodes[idx])
    }

    fn prefixed(&self, prefix: String) -> PrefixIter<'_> {
        let start = self
            .nodes
            .partition_point(|node| node.code.as_str() < prefix.as_str());
        PrefixIter {
            nodes: self.nodes[start..].iter(),
            prefix,
        }
    }

    fn empty(&self) -> PrefixIter<'_> {
        PrefixIter {
            nodes: Default::default(),
            prefix: String::new(),
        }
    }

    /// Every node strictly below `code`, at any depth.
    ///
    /// `code` itself need not be a node. Unknown or malformed codes give an
    /// empty sequence.
    pub fn subtree_of(&self, code: &str) -> PrefixIter<'_> {
        if validate_code(code).is_err() {
            return self.empty();
        }
        self.prefixed(format!("{code}{CODE_SEPARATOR}"))
    }

    /// Immediate children of `code`: one level deeper and inside its subtree.
    pub fn children_of(&self, code: &str) -> impl Iterator<Item = &ThesaurusNode> + '_ {
        let child_depth = depth(code).map(|d| d + 1).unwrap_or(0);
        self.subtree_of(code)
            .filter(move |node| node.depth() == child_depth)
    }

    /// Raw string prefix match on codes, without the segment-boundary check.
    ///
    /// `find_by_code_prefix("AUT.AAA.AA")` also returns `AUT.AAA.AAC...`. This is
    /// for broad category scans; use [`Thesaurus::subtree_of`] for ancestry.
    pub fn find_by_code_prefix(&self, prefix: &str) -> PrefixIter<'_> {
        self.prefixed(prefix.to_string())
    }

    /// Case-insensitive substring search over terms.
    pub fn find_by_term_substring(&self, pattern: &str) -> impl Iterator<Item = &ThesaurusNode> + '_ {
        let needle = pattern.to_lowercase();
        self.nodes
            .iter()
            .zip(&self.lower_terms)
            .filter(move |(_, term)| term.contains(needle.as_str()))
            .map(|(node, _)| node)
    }

    /// Case-insensitive exact term lookup. Several nodes may share a term.
    pub fn find_by_term(&self, term: &str) -> impl Iterator<Item = &ThesaurusNode> + '_ {
        self.by_term
            .get(&term.to_lowercase())
            .into_iter()
            .flatten()
            .map(move |&idx| &self.nodes[idx])
    }

    /// Nodes sharing a term master id (synonyms and variants of one concept).
    pub fn variants_of(&self, term_master_id: &str) -> impl Iterator<Item = &ThesaurusNode> + '_ {
        self.by_master
            .get(term_master_id)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.nodes[idx])
    }

    /// Ancestor nodes present in the tree, root first.
    pub fn ancestors_of(&self, code: &str) -> Vec<&ThesaurusNode> {
        ancestor_codes(code)
            .map(|codes| codes.into_iter().filter_map(|c| self.get(c)).collect())
            .unwrap_or_default()
    }

    /// Nodes whose parent code has no node of its own.
    pub fn roots(&self) -> impl Iterator<Item = &ThesaurusNode> + '_ {
        self.nodes.iter().filter(move |node| {
            parent_code(&node.code)
                .ok()
                .flatten()
                .is_none_or(|parent| !self.by_code.contains_key(parent))
        })
    }

    /// Node count per depth.
    pub fn depth_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for node in &self.nodes {
            *histogram.entry(node.depth()).or_insert(0) += 1;
        }
        histogram
    }

    pub fn mean_depth(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        let total: usize = self.nodes.iter().map(ThesaurusNode::depth).sum();
        total as f64 / self.nodes.len() as f64
    }

    pub fn unique_master_ids(&self) -> usize {
        self.by_master.len()
    }

    /// Nodes linked to an external authority vocabulary.
    pub fn authority_linked(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.external_authority_id.is_some())
            .count()
    }
}
