//! Cleanup table mapping raw object names to normalized terms.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::constants::EXCLUSION_MARKER;

/// The cleaned-term column of a mapping row, in one of three disjoint states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "term", rename_all = "snake_case")]
pub enum CleanedTerm {
    /// The raw name consolidates into this standard term.
    Target(String),
    /// The raw name is dropped from the controlled collection.
    Excluded,
    /// No cleaned value: the raw name is already canonical.
    Absent,
}

impl CleanedTerm {
    /// Interpret a raw spreadsheet cell.
    ///
    /// Blank cells are absent, the reserved marker `*` excludes, anything else is a
    /// consolidation target with surrounding whitespace removed.
    pub fn from_cell(cell: Option<&str>) -> Self {
        match cell.map(str::trim) {
            None | Some("") => CleanedTerm::Absent,
            Some(EXCLUSION_MARKER) => CleanedTerm::Excluded,
            Some(term) => CleanedTerm::Target(term.to_string()),
        }
    }
}

/// One row of the cleanup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub original: String,
    pub cleaned: CleanedTerm,
    pub frequency: u64,
}

impl MappingEntry {
    pub fn new(original: impl Into<String>, cleaned: CleanedTerm, frequency: u64) -> Self {
        Self {
            original: original.into(),
            cleaned,
            frequency,
        }
    }
}

/// Fully loaded, read-only cleanup table keyed by the verbatim original name.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
    index: HashMap<String, usize>,
}

impl MappingTable {
    /// Build the table. A repeated original keeps its first row; repeats are
    /// handed back so the caller can report them.
    pub fn from_entries(
        entries: impl IntoIterator<Item = MappingEntry>,
    ) -> (Self, Vec<MappingEntry>) {
        let mut table = Self::default();
        let mut duplicates = Vec::new();

        for entry in entries {
            if table.index.contains_key(&entry.original) {
                duplicates.push(entry);
                continue;
            }
            table
                .index
                .insert(entry.original.clone(), table.entries.len());
            table.entries.push(entry);
        }

        (table, duplicates)
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, original: &str) -> Option<&MappingEntry> {
        self.index.get(original).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, original: &str) -> bool {
        self.index.contains_key(original)
    }

    /// Rows in source order.
    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
