//! Scroll anchors for section headers.

use crate::domain::SectionId;
use std::collections::BTreeMap;

/// Content-space y of each section header, captured during layout.
///
/// Scrolling to a section means moving the scroll offset to its anchor, which lines
/// the header up with the viewport top.
#[derive(Debug, Clone, Default)]
pub struct SectionAnchors {
    content_tops: BTreeMap<SectionId, f32>,
    /// Largest scroll offset the host can reach.
    max_scroll: f32,
}

impl SectionAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: SectionId, content_y: f32) {
        self.content_tops.insert(id, content_y);
    }

    pub fn set_max_scroll(&mut self, max_scroll: f32) {
        self.max_scroll = max_scroll.max(0.0);
    }

    pub fn clear(&mut self) {
        self.content_tops.clear();
        self.max_scroll = 0.0;
    }

    /// Scroll offset that brings `id`'s header to the viewport top, clamped to the
    /// scrollable range.
    pub fn scroll_target(&self, id: SectionId) -> Option<f32> {
        self.content_tops
            .get(&id)
            .map(|y| y.clamp(0.0, self.max_scroll.max(0.0)))
    }
}
