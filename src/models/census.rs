//! Frequency census of raw object names.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw object name as recorded by catalogers, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    pub name: String,
    pub frequency: u64,
}

impl NameRecord {
    pub fn new(name: impl Into<String>, frequency: u64) -> Self {
        Self {
            name: name.into(),
            frequency,
        }
    }
}

/// Read-only collection of name records keyed by name.
///
/// Records keep their source order, which is the census ranking (rank 0 is the
/// most frequent name).
#[derive(Debug, Clone, Default)]
pub struct NameCensus {
    records: Vec<NameRecord>,
    index: HashMap<String, usize>,
}

impl NameCensus {
    /// Build a census from records in rank order.
    ///
    /// Names must be unique; a repeated name keeps its first (higher ranked)
    /// occurrence and the repeat is returned in the second tuple element.
    pub fn from_records(records: impl IntoIterator<Item = NameRecord>) -> (Self, Vec<NameRecord>) {
        let mut census = Self::default();
        let mut duplicates = Vec::new();

        for record in records {
            if census.index.contains_key(&record.name) {
                duplicates.push(record);
                continue;
            }
            census
                .index
                .insert(record.name.clone(), census.records.len());
            census.records.push(record);
        }

        (census, duplicates)
    }

    pub fn get(&self, name: &str) -> Option<&NameRecord> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    /// Position of the name in the census ranking.
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Records in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &NameRecord> + '_ {
        self.records.iter()
    }

    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total number of catalogued objects (sum of all frequencies).
    pub fn total_frequency(&self) -> u64 {
        self.records.iter().map(|r| r.frequency).sum()
    }
}
