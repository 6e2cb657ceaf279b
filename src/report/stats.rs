//! Census statistics helpers.

use serde::Serialize;

use crate::models::constants::FREQUENCY_BANDS;
use crate::models::{NameCensus, NameRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CensusStats {
    pub unique_names: usize,
    pub total_objects: u64,
    pub mean_frequency: f64,
    pub median_frequency: f64,
    /// Names catalogued exactly once
    pub singletons: usize,
    pub at_least_10: usize,
    pub at_least_100: usize,
    /// Most frequent names, ties kept in census order
    pub top: Vec<NameRecord>,
}

impl CensusStats {
    pub fn from_census(census: &NameCensus, top_n: usize) -> Self {
        let frequencies: Vec<u64> = census.iter().map(|r| r.frequency).collect();
        let total_objects = census.total_frequency();
        let mean_frequency = if frequencies.is_empty() {
            0.0
        } else {
            total_objects as f64 / frequencies.len() as f64
        };

        let mut top: Vec<NameRecord> = census.iter().cloned().collect();
        top.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        top.truncate(top_n);

        Self {
            unique_names: census.len(),
            total_objects,
            mean_frequency,
            median_frequency: median(frequencies),
            singletons: census.iter().filter(|r| r.frequency == 1).count(),
            at_least_10: census.iter().filter(|r| r.frequency >= 10).count(),
            at_least_100: census.iter().filter(|r| r.frequency >= 100).count(),
            top,
        }
    }
}

fn median(mut values: Vec<u64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] as f64 + values[mid] as f64) / 2.0
    } else {
        values[mid] as f64
    }
}

/// Names and objects falling into one frequency band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandCount {
    pub label: &'static str,
    pub names: usize,
    pub objects: u64,
}

pub fn frequency_bands(census: &NameCensus) -> Vec<BandCount> {
    FREQUENCY_BANDS
        .iter()
        .map(|&(min, max, label)| {
            let in_band = census
                .iter()
                .filter(|r| (min..=max).contains(&r.frequency));
            let (names, objects) = in_band.fold((0, 0), |(n, o), r| (n + 1, o + r.frequency));
            BandCount {
                label,
                names,
                objects,
            }
        })
        .collect()
}

/// Surface features of how names are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamingPatterns {
    pub hyphen: usize,
    pub comma: usize,
    pub multiple_words: usize,
    pub single_word: usize,
    pub digits: usize,
    /// Names starting with `A`-`Z`, `Ä`, `Ö` or `Ü`
    pub capitalized: usize,
}

impl NamingPatterns {
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut patterns = Self::default();
        for name in names {
            if name.contains('-') {
                patterns.hyphen += 1;
            }
            if name.contains(',') {
                patterns.comma += 1;
            }
            match name.split_whitespace().count() {
                0 => {}
                1 => patterns.single_word += 1,
                _ => patterns.multiple_words += 1,
            }
            if name.chars().any(|c| c.is_ascii_digit()) {
                patterns.digits += 1;
            }
            if name.trim_start().chars().next().is_some_and(is_capital) {
                patterns.capitalized += 1;
            }
        }
        patterns
    }
}

fn is_capital(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, 'Ä' | 'Ö' | 'Ü')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn census(rows: &[(&str, u64)]) -> NameCensus {
        NameCensus::from_records(rows.iter().map(|&(n, f)| NameRecord::new(n, f))).0
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![5, 1, 3]), 3.0);
        assert_eq!(median(vec![4, 1, 3, 10]), 3.5);
    }

    #[test]
    fn test_census_stats() {
        let census = census(&[("Schale", 120), ("Löffel", 10), ("Maske", 1), ("Korb", 1)]);
        let stats = CensusStats::from_census(&census, 2);
        assert_eq!(stats.unique_names, 4);
        assert_eq!(stats.total_objects, 132);
        assert_eq!(stats.mean_frequency, 33.0);
        assert_eq!(stats.median_frequency, 5.5);
        assert_eq!(stats.singletons, 2);
        assert_eq!(stats.at_least_10, 2);
        assert_eq!(stats.at_least_100, 1);
        let top: Vec<_> = stats.top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(top, vec!["Schale", "Löffel"]);
    }

    #[test]
    fn test_frequency_bands() {
        let census = census(&[("a", 1), ("b", 9), ("c", 10), ("d", 999), ("e", 1000), ("f", 2)]);
        let bands = frequency_bands(&census);
        let names: Vec<_> = bands.iter().map(|b| (b.label, b.names)).collect();
        assert_eq!(
            names,
            vec![("1", 1), ("2-9", 2), ("10-99", 1), ("100-999", 1), ("1000+", 1)]
        );
        assert_eq!(bands[1].objects, 11);
    }

    #[test]
    fn test_naming_patterns() {
        let patterns = NamingPatterns::from_names([
            "Kästchen-Set",
            "Maske, bemalt",
            "Öllampe",
            "kleiner Korb 2",
        ]);
        assert_eq!(patterns.hyphen, 1);
        assert_eq!(patterns.comma, 1);
        assert_eq!(patterns.single_word, 2);
        assert_eq!(patterns.multiple_words, 2);
        assert_eq!(patterns.digits, 1);
        assert_eq!(patterns.capitalized, 3);
    }

    #[test]
    fn test_capitalized_counts_german_capitals_only() {
        let patterns = NamingPatterns::from_names(["Übertopf", " Axt", "Élan", "Šal", "äxte"]);
        assert_eq!(patterns.capitalized, 2);
    }
}
