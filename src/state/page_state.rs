//! Host-side scroll state of the outlet page.
//!
//! Holds what the GUI needs between frames that is not part of the library's
//! visibility state: where each section's anchor is, the current scroll offset and
//! any running scroll-to-section animation.

use routlet::coordination::{ScrollAnimation, SectionAnchors};
use routlet::SectionId;

#[derive(Debug, Default)]
pub struct PageState {
    /// Anchors captured during the last layout pass
    anchors: SectionAnchors,
    /// Vertical scroll offset reported by the scroll area last frame
    scroll_offset: f32,
    /// Running scroll-to-section animation
    animation: Option<ScrollAnimation>,
    /// Section the running animation is heading to
    scroll_target: Option<SectionId>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets layout-derived state, e.g. when the section list is replaced.
    pub fn reset(&mut self) {
        self.anchors.clear();
        self.animation = None;
        self.scroll_target = None;
    }

    // ===== Queries =====

    pub fn anchors(&self) -> &SectionAnchors {
        &self.anchors
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn scroll_target(&self) -> Option<SectionId> {
        self.scroll_target
    }

    /// Offset the scroll area should be forced to this frame, if an animation runs.
    ///
    /// Finished animations are dropped after yielding their final offset.
    pub fn animated_offset(&mut self, now: f64) -> Option<f32> {
        let animation = self.animation?;
        let offset = animation.sample(now);
        if animation.is_finished(now) {
            self.animation = None;
            self.scroll_target = None;
        }
        Some(offset)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    // ===== Mutations =====

    pub fn anchors_mut(&mut self) -> &mut SectionAnchors {
        &mut self.anchors
    }

    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    /// Starts scrolling to `target`, replacing any running animation.
    pub fn start_scroll(&mut self, target: SectionId, to: f32, duration: f32, now: f64) {
        self.animation = Some(ScrollAnimation::new(self.scroll_offset, to, duration, now));
        self.scroll_target = Some(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_runs_to_completion_then_clears() {
        let mut page = PageState::new();
        page.set_scroll_offset(100.0);
        page.start_scroll(SectionId::Dinner, 600.0, 0.25, 1.0);

        assert_eq!(page.animated_offset(1.0), Some(100.0));
        assert!(page.is_animating());
        assert_eq!(page.animated_offset(1.25), Some(600.0));
        assert!(!page.is_animating());
        assert_eq!(page.scroll_target(), None);
        assert_eq!(page.animated_offset(1.3), None);
    }

    #[test]
    fn test_new_scroll_replaces_running_one() {
        let mut page = PageState::new();
        page.start_scroll(SectionId::Dinner, 600.0, 0.25, 0.0);
        page.set_scroll_offset(300.0);
        page.start_scroll(SectionId::Lunch, 200.0, 0.25, 0.1);

        assert_eq!(page.scroll_target(), Some(SectionId::Lunch));
        assert_eq!(page.animated_offset(0.1), Some(300.0));
    }
}
