//! Page sections.

use crate::domain::{Item, LayoutStyle, SectionId};
use std::hash::{Hash, Hasher};

/// One titled group of items on the outlet page.
///
/// Equality and hashing look at `id` only. Sections are compared on every scroll pass,
/// so they must never hash their item lists.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: SectionId,
    pub header_title: String,
    pub layout: LayoutStyle,
    pub is_sticky: bool,
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(id: SectionId, layout: LayoutStyle, items: Vec<Item>) -> Self {
        Self {
            id,
            header_title: id.display_name().to_string(),
            layout,
            is_sticky: true,
            items,
        }
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Section {}

impl Hash for Section {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Id of the first section in declared order, if any.
pub fn first_section_id(sections: &[Section]) -> Option<SectionId> {
    sections.first().map(|section| section.id)
}
