//! Text normalization steps used by the thesaurus matcher.

use regex::Regex;
use std::sync::LazyLock;

/// Diminutive endings stripped before a thesaurus lookup, tried in this order.
pub const STRIP_DIMINUTIVES: &[&str] = &["chen", "lein", "el", "erl", "le"];

/// Material prefixes stripped before a thesaurus lookup, tried in this order.
pub const STRIP_MATERIALS: &[&str] = &[
    "stein", "holz", "kupfer", "bronze", "eisen", "gold", "silber", "ton", "keramik", "glas",
    "leder", "stoff", "wolle", "seide", "bambus", "elfenbein", "knochen", "metall", "papier",
];

/// Object keywords pulled out of long descriptions.
pub const OBJECT_KEYWORDS: &[&str] = &[
    "schachtel", "korb", "gürtel", "pfeil", "speer", "beil", "axt", "figur", "maske", "schmuck",
    "kette", "armband", "ring", "gefäß", "schale", "teller", "becher", "flasche", "waffe",
    "schwert", "messer", "dolch", "lanze", "instrument", "trommel", "flöte", "harfe", "textil",
    "tuch", "decke", "teppich", "kleidung", "werkzeug", "hammer", "meißel", "säge",
];

/// Minimum characters left after removing a material prefix.
const MIN_MATERIAL_REST: usize = 3;

static ADMINISTRATIVE_NOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)als imitation|getauscht|ausgeschieden|dublette|post \d+|inventar|nicht vorhanden",
    )
    .expect("Invalid administrative note pattern")
});

/// True for entries that record an administrative note rather than an object
/// (exchanged, written off, duplicate, missing).
pub fn is_administrative_note(name: &str) -> bool {
    ADMINISTRATIVE_NOTE.is_match(name)
}

/// Lowercase and trim for lookups.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Replace umlauts with their base vowels (Körbchen stem `körb` becomes `korb`).
pub fn fold_umlauts(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'ä' => 'a',
            'ö' => 'o',
            'ü' => 'u',
            other => other,
        })
        .collect()
}

/// Remove a diminutive ending from a normalized term.
///
/// Returns the folded stem and the suffix removed. The term must be more than
/// two characters longer than the suffix.
pub fn strip_diminutive(term: &str) -> Option<(String, &'static str)> {
    let len = term.chars().count();
    STRIP_DIMINUTIVES
        .iter()
        .find(|suffix| term.ends_with(*suffix) && len > suffix.len() + 2)
        .map(|suffix| (fold_umlauts(&term[..term.len() - suffix.len()]), *suffix))
}

/// Remove a leading material name from a normalized term.
pub fn strip_material(term: &str) -> Option<(String, &'static str)> {
    STRIP_MATERIALS.iter().find_map(|material| {
        let rest = term.strip_prefix(material)?.trim();
        (rest.chars().count() >= MIN_MATERIAL_REST).then(|| (rest.to_string(), *material))
    })
}

/// Longest object keyword contained in a normalized term.
pub fn extract_keyword(term: &str) -> Option<&'static str> {
    let mut keywords = OBJECT_KEYWORDS.to_vec();
    keywords.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));
    keywords.into_iter().find(|keyword| term.contains(keyword))
}
