//! Visibility state and thresholds.

use crate::domain::SectionId;

/// Snapshot of what the tag bar should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityState {
    /// Section highlighted in the tag bar.
    pub active_section: Option<SectionId>,
    /// Whether the sticky tag bar is mounted. Hidden while the outlet header shows.
    pub tag_bar_visible: bool,
}

/// Thresholds driving the visibility state machine, in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityThresholds {
    /// Hidden → visible once the first header is at or above this offset.
    pub show: f32,
    /// Visible → hidden once the first header is strictly below this offset.
    pub hide: f32,
    /// Inclusive lower bound of the active band.
    pub band_start: f32,
    /// Exclusive upper bound of the active band.
    pub band_end: f32,
}

impl Default for VisibilityThresholds {
    fn default() -> Self {
        Self {
            show: 0.0,
            hide: 12.0,
            band_start: -2.0,
            band_end: 60.0,
        }
    }
}

impl VisibilityThresholds {
    pub fn in_active_band(&self, offset: f32) -> bool {
        offset >= self.band_start && offset < self.band_end
    }
}

/// How the host should apply a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Apply instantly, overriding any implicit animation.
    Immediate,
    /// Use whatever animation the host would normally apply.
    Inherited,
}

/// A state-changing update, delivered once to each subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityChange {
    pub previous: VisibilityState,
    pub current: VisibilityState,
    pub transition: Transition,
}

impl VisibilityChange {
    pub fn tag_bar_flipped(&self) -> bool {
        self.previous.tag_bar_visible != self.current.tag_bar_visible
    }

    pub fn active_changed(&self) -> bool {
        self.previous.active_section != self.current.active_section
    }
}
