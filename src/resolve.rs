//! Resolution of raw object names through the cleanup table.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::models::{CleanedTerm, MappingTable};

/// What the cleanup table says about a raw name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "target", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// Consolidate into the given standard term
    Consolidated(String),
    /// Drop from the controlled collection
    Excluded,
    /// Row exists without a cleaned value; the name is already canonical
    Unmapped,
}

impl ResolutionOutcome {
    /// The term the name ends up as, if it stays in the collection.
    pub fn canonical_term<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        match self {
            ResolutionOutcome::Consolidated(target) => Some(target),
            ResolutionOutcome::Unmapped => Some(name),
            ResolutionOutcome::Excluded => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResolutionOutcome::Consolidated(_) => "consolidated",
            ResolutionOutcome::Excluded => "excluded",
            ResolutionOutcome::Unmapped => "unmapped",
        }
    }
}

/// Resolve a name by exact, case-sensitive lookup of the original column.
///
/// Fails with [`CoreError::NotFound`] when the table has no row for `name`; that
/// is different from [`ResolutionOutcome::Unmapped`], which means the row exists
/// but carries no cleaned value.
pub fn resolve(name: &str, table: &MappingTable) -> CoreResult<ResolutionOutcome> {
    let entry = table.get(name).ok_or_else(|| CoreError::NotFound {
        name: name.to_string(),
    })?;

    let outcome = match &entry.cleaned {
        CleanedTerm::Target(target) => ResolutionOutcome::Consolidated(target.clone()),
        CleanedTerm::Excluded => ResolutionOutcome::Excluded,
        CleanedTerm::Absent => ResolutionOutcome::Unmapped,
    };

    tracing::debug!(name, outcome = outcome.label(), "resolved object name");
    Ok(outcome)
}

/// Resolve a name, treating a missing row as "no source data".
pub fn resolve_or_none(name: &str, table: &MappingTable) -> Option<ResolutionOutcome> {
    match resolve(name, table) {
        Ok(outcome) => Some(outcome),
        Err(CoreError::NotFound { .. }) => None,
        Err(err) => {
            tracing::warn!(name, error = %err, "unexpected resolution error");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MappingEntry;

    fn table() -> MappingTable {
        let (table, _) = MappingTable::from_entries(vec![
            MappingEntry::new("Holzlöffel", CleanedTerm::Target("Löffel".into()), 12),
            MappingEntry::new("Kriegsbeute", CleanedTerm::Excluded, 3),
            MappingEntry::new("Amulett", CleanedTerm::Absent, 7),
        ]);
        table
    }

    #[test]
    fn test_resolve_three_states() {
        let table = table();
        assert_eq!(
            resolve("Holzlöffel", &table).unwrap(),
            ResolutionOutcome::Consolidated("Löffel".to_string())
        );
        assert_eq!(
            resolve("Kriegsbeute", &table).unwrap(),
            ResolutionOutcome::Excluded
        );
        assert_eq!(resolve("Amulett", &table).unwrap(), ResolutionOutcome::Unmapped);
    }

    #[test]
    fn test_resolve_missing_name_is_not_found() {
        let table = table();
        let err = resolve("Speer", &table).unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound {
                name: "Speer".to_string()
            }
        );
        assert!(resolve_or_none("Speer", &table).is_none());
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let table = table();
        assert!(resolve("amulett", &table).is_err());
        assert!(resolve("Amulett ", &table).is_err());
    }

    #[test]
    fn test_resolve_total_over_members() {
        let table = table();
        for entry in table.iter() {
            assert!(resolve(&entry.original, &table).is_ok());
        }
    }

    #[test]
    fn test_canonical_term() {
        assert_eq!(
            ResolutionOutcome::Consolidated("Löffel".into()).canonical_term("Holzlöffel"),
            Some("Löffel")
        );
        assert_eq!(
            ResolutionOutcome::Unmapped.canonical_term("Amulett"),
            Some("Amulett")
        );
        assert_eq!(ResolutionOutcome::Excluded.canonical_term("Kriegsbeute"), None);
    }
}
