use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of spend categories used for breakdowns.
///
/// Declaration order is the deterministic tie-break order when categories
/// are ranked, so variants must stay in this sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    Streaming,
    Software,
    Saas,
    Fitness,
    Utilities,
    Gaming,
    Education,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Streaming,
        Category::Software,
        Category::Saas,
        Category::Fitness,
        Category::Utilities,
        Category::Gaming,
        Category::Education,
        Category::Other,
    ];

    /// Canonical lowercase key, matching the persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Streaming => "streaming",
            Category::Software => "software",
            Category::Saas => "saas",
            Category::Fitness => "fitness",
            Category::Utilities => "utilities",
            Category::Gaming => "gaming",
            Category::Education => "education",
            Category::Other => "other",
        }
    }

    /// Display label for dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Streaming => "Streaming",
            Category::Software => "Software",
            Category::Saas => "SaaS",
            Category::Fitness => "Academia",
            Category::Utilities => "Utilitários",
            Category::Gaming => "Gaming",
            Category::Education => "Educação",
            Category::Other => "Outros",
        }
    }

    /// Maps a raw category value to the closed set, sending anything
    /// unrecognized to [`Category::Other`]. Unknown values never propagate
    /// past this boundary.
    pub fn parse_lossy(raw: &str) -> Category {
        match raw.trim().to_ascii_lowercase().as_str() {
            "streaming" => Category::Streaming,
            "software" => Category::Software,
            "saas" => Category::Saas,
            "fitness" => Category::Fitness,
            "utilities" => Category::Utilities,
            "gaming" => Category::Gaming,
            "education" => Category::Education,
            "other" => Category::Other,
            unknown => {
                tracing::warn!(category = unknown, "unknown category, mapping to `other`");
                Category::Other
            }
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::parse_lossy(&raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
