//! Tag bar model: one chip per section, highlighting the active one.
//!
//! The tag bar holds no state of its own. Tapping a chip only asks the host to scroll;
//! the active section changes later, when the scrolled header settles into the active
//! band and the scroll coordinator picks it up.

use crate::domain::{Section, SectionId};

/// Identifier of the scrollable outlet surface.
pub const OUTLET_SCROLL_ID: &str = "outlet_scroll";

/// Prefix of every chip identifier.
pub const TAG_ID_PREFIX: &str = "tag_";

/// Stable identifier of the chip for `id`, e.g. `tag_Promotions`.
pub fn chip_identifier(id: SectionId) -> String {
    format!("{}{}", TAG_ID_PREFIX, id.display_name())
}

/// One rendered chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub section_id: SectionId,
    pub label: String,
    pub identifier: String,
    pub is_active: bool,
}

/// View over the section list and the active section.
#[derive(Debug, Clone, Copy)]
pub struct TagBar<'a> {
    sections: &'a [Section],
    active: Option<SectionId>,
}

impl<'a> TagBar<'a> {
    pub fn new(sections: &'a [Section], active: Option<SectionId>) -> Self {
        Self { sections, active }
    }

    /// Chips in section order.
    pub fn chips(&self) -> Vec<TagChip> {
        self.sections
            .iter()
            .map(|section| TagChip {
                section_id: section.id,
                label: section.header_title.clone(),
                identifier: chip_identifier(section.id),
                is_active: self.active == Some(section.id),
            })
            .collect()
    }

    /// Handles a tap on the chip for `id`. Calls `on_tap` unless it is the active chip.
    ///
    /// Returns whether `on_tap` was called.
    pub fn tap<F>(&self, id: SectionId, on_tap: F) -> bool
    where
        F: FnOnce(SectionId),
    {
        if self.active == Some(id) {
            return false;
        }
        on_tap(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demo::demo_sections;

    #[test]
    fn test_chips_follow_section_order() {
        let sections = demo_sections();
        let chips = TagBar::new(&sections, Some(SectionId::Dinner)).chips();

        let labels: Vec<_> = chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Lunch", "Dinner", "Promotions", "Desserts"]);

        let active: Vec<_> = chips.iter().filter(|c| c.is_active).map(|c| c.section_id).collect();
        assert_eq!(active, vec![SectionId::Dinner]);
    }

    #[test]
    fn test_chip_identifiers() {
        assert_eq!(chip_identifier(SectionId::Lunch), "tag_Lunch");
        assert_eq!(chip_identifier(SectionId::Promos), "tag_Promotions");
    }

    #[test]
    fn test_tap_inactive_chip_requests_scroll() {
        let sections = demo_sections();
        let bar = TagBar::new(&sections, Some(SectionId::Lunch));

        let mut requested = None;
        assert!(bar.tap(SectionId::Desserts, |id| requested = Some(id)));
        assert_eq!(requested, Some(SectionId::Desserts));
    }

    #[test]
    fn test_tap_active_chip_is_noop() {
        let sections = demo_sections();
        let bar = TagBar::new(&sections, Some(SectionId::Lunch));

        let mut called = false;
        assert!(!bar.tap(SectionId::Lunch, |_| called = true));
        assert!(!called);
    }

    #[test]
    fn test_no_active_section_means_every_tap_fires() {
        let sections = demo_sections();
        let bar = TagBar::new(&sections, None);
        assert!(bar.chips().iter().all(|c| !c.is_active));
        assert!(bar.tap(SectionId::Lunch, |_| {}));
    }
}
