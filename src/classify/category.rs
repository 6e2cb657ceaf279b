//! Semantic categories assigned to raw object names.

use serde::{Deserialize, Serialize};

/// Category of a raw object name. Exactly one per name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Ends in a diminutive suffix (Kästchen, Figürlein)
    Diminutive,
    /// Hyphenated or joined names (Pfeil-Bogen, Messer und Gabel)
    Compound,
    /// Mentions a material (Holzschale, Eisenbeil)
    MaterialObject,
    /// Mentions a culture, region or named artifact type (Kris, Kalebasse)
    CulturalSpecific,
    /// Longer than 25 characters or more than three words
    LongDescriptive,
    /// Two or three words
    Descriptive,
    /// One short word
    Simple,
    /// Nothing above applies
    Unclassified,
}

impl Category {
    /// All categories in rule precedence order.
    pub const ALL: [Category; 8] = [
        Category::Diminutive,
        Category::Compound,
        Category::MaterialObject,
        Category::CulturalSpecific,
        Category::LongDescriptive,
        Category::Descriptive,
        Category::Simple,
        Category::Unclassified,
    ];

    /// Human readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Category::Diminutive => "Diminutives",
            Category::Compound => "Compound names",
            Category::MaterialObject => "Material + object",
            Category::CulturalSpecific => "Cultural-specific names",
            Category::LongDescriptive => "Long descriptive names",
            Category::Descriptive => "Descriptive names",
            Category::Simple => "Simple names",
            Category::Unclassified => "Unclassified",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Diminutive => write!(f, "diminutive"),
            Category::Compound => write!(f, "compound"),
            Category::MaterialObject => write!(f, "material_object"),
            Category::CulturalSpecific => write!(f, "cultural_specific"),
            Category::LongDescriptive => write!(f, "long_descriptive"),
            Category::Descriptive => write!(f, "descriptive"),
            Category::Simple => write!(f, "simple"),
            Category::Unclassified => write!(f, "unclassified"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|c| c.to_string() == normalized)
            .ok_or_else(|| anyhow::anyhow!("Invalid category: {s}"))
    }
}
