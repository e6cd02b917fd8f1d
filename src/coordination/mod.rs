//! Scroll coordination: header measurements in, tag bar state out.
//!
//! - Header offset maps (per-pass measurements)
//! - Visibility state and thresholds
//! - The scroll coordinator state machine
//! - Sticky header geometry, section anchors and scroll animation for the host

mod header_offsets;
mod visibility;
mod scroll_coordinator;
pub mod sticky_headers;
mod anchors;
mod scroll_animation;

pub use header_offsets::HeaderOffsetMap;
pub use visibility::{Transition, VisibilityChange, VisibilityState, VisibilityThresholds};
pub use scroll_coordinator::{
    next_tag_bar_visibility, select_active_section, ScrollCoordinator, SubscriptionId,
};
pub use anchors::SectionAnchors;
pub use scroll_animation::{ease_in_out, ScrollAnimation};
