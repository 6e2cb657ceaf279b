/// Reserved cleaned-term value marking a raw name for exclusion.
pub const EXCLUSION_MARKER: &str = "*";

/// Separator between hierarchical code segments.
pub const CODE_SEPARATOR: char = '.';

/// Default number of example names kept per category in reports.
pub const DEFAULT_EXAMPLES_PER_CATEGORY: usize = 15;

/// Default length of the most-frequent-names list.
pub const DEFAULT_TOP_N: usize = 25;

/// Names occurring at most this often are queued for thesaurus matching.
/// More frequent names were curated by hand in the cleanup table.
pub const DEFAULT_REVIEW_FREQUENCY_CAP: u64 = 12;

/// Minimum match confidence (percent) for a suggestion to be accepted without review.
pub const DEFAULT_CONFIDENCE_THRESHOLD: u8 = 80;

/// Confidence values (percent) assigned by each matcher step.
pub mod confidence {
    pub const REFERENCE: u8 = 100;
    pub const EXACT: u8 = 100;
    pub const DIMINUTIVE: u8 = 90;
    pub const MATERIAL: u8 = 85;
    pub const KEYWORD: u8 = 75;
}

/// Frequency bands used for the census distribution: (min, max, label).
pub const FREQUENCY_BANDS: &[(u64, u64, &str)] = &[
    (1, 1, "1"),
    (2, 9, "2-9"),
    (10, 99, "10-99"),
    (100, 999, "100-999"),
    (1000, u64::MAX, "1000+"),
];
