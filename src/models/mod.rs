pub mod census;
pub mod constants;
pub mod mapping;
pub mod thesaurus;

pub use census::{NameCensus, NameRecord};
pub use mapping::{CleanedTerm, MappingEntry, MappingTable};
pub use thesaurus::ThesaurusNode;
