//! Section identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one section of the outlet page.
///
/// The declaration order is the canonical page order. Ids double as scroll anchors
/// and as map keys for header offsets, so they are `Copy` and totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Lunch,
    Dinner,
    Promos,
    Desserts,
}

impl SectionId {
    /// Every section id in page order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Lunch,
        SectionId::Dinner,
        SectionId::Promos,
        SectionId::Desserts,
    ];

    /// Human-readable name, also used to derive stable chip identifiers.
    pub fn display_name(self) -> &'static str {
        match self {
            SectionId::Lunch => "Lunch",
            SectionId::Dinner => "Dinner",
            SectionId::Promos => "Promotions",
            SectionId::Desserts => "Desserts",
        }
    }

    /// Lowercase key used in datasets and config files.
    pub fn key(self) -> &'static str {
        match self {
            SectionId::Lunch => "lunch",
            SectionId::Dinner => "dinner",
            SectionId::Promos => "promos",
            SectionId::Desserts => "desserts",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
