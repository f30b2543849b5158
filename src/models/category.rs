use serde::{Deserialize, Serialize};

/// Closed set of expense categories. The persisted form is the plain
/// variant name ("Food", "Travel", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Rent,
    Shopping,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Rent => "Rent",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "travel" => Some(Self::Travel),
            "rent" => Some(Self::Rent),
            "shopping" => Some(Self::Shopping),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Travel,
            Self::Rent,
            Self::Shopping,
            Self::Other,
        ]
    }

    /// Short marker shown next to the category in the table.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Food => "◆",
            Self::Travel => "▲",
            Self::Rent => "■",
            Self::Shopping => "●",
            Self::Other => "·",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
