//! Scroll-driven visibility state machine.
//!
//! Every layout pass the host hands over a [`HeaderOffsetMap`]. The coordinator reduces
//! it into a [`VisibilityState`]:
//!
//! 1. The active section is the in-band header with the smallest offset. When no header
//!    is in band the previous active section is kept.
//! 2. Tag bar visibility follows the first section's header with hysteresis: it shows
//!    once that header reaches `show` and hides only once it sits more than `hide` below
//!    the viewport top. Values in between never flip the state in either direction.
//!
//! Subscribers are notified once per update that changes the state, after both fields
//! have been computed, so they never see a half-applied update.

use crate::coordination::{
    HeaderOffsetMap, Transition, VisibilityChange, VisibilityState, VisibilityThresholds,
};
use crate::domain::{first_section_id, Section, SectionId};

/// Handle returned by [`ScrollCoordinator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&VisibilityChange)>;

/// Owns the page's [`VisibilityState`] for its whole lifetime.
pub struct ScrollCoordinator {
    state: VisibilityState,
    thresholds: VisibilityThresholds,
    /// Set once the section list has been non-empty at least once.
    seeded: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl std::fmt::Debug for ScrollCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollCoordinator")
            .field("state", &self.state)
            .field("thresholds", &self.thresholds)
            .field("seeded", &self.seeded)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for ScrollCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollCoordinator {
    /// Creates a coordinator with the default thresholds, tag bar hidden and no active
    /// section.
    pub fn new() -> Self {
        Self::with_thresholds(VisibilityThresholds::default())
    }

    pub fn with_thresholds(thresholds: VisibilityThresholds) -> Self {
        Self {
            state: VisibilityState::default(),
            thresholds,
            seeded: false,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ===== Queries =====

    /// Current immutable snapshot.
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.state.active_section
    }

    pub fn tag_bar_visible(&self) -> bool {
        self.state.tag_bar_visible
    }

    pub fn thresholds(&self) -> VisibilityThresholds {
        self.thresholds
    }

    // ===== Subscriptions =====

    /// Registers a callback fired once for every state-changing update.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&VisibilityChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    // ===== Updates =====

    /// Reduces one pass of header offsets into the visibility state.
    ///
    /// `sections` supplies the declared order; only the first section's offset drives
    /// tag bar visibility. Returns the change if anything changed.
    pub fn apply_offsets(
        &mut self,
        offsets: &HeaderOffsetMap,
        sections: &[Section],
    ) -> Option<VisibilityChange> {
        let previous = self.state;
        let mut next = previous;

        if let Some(active) = select_active_section(offsets, &self.thresholds) {
            next.active_section = Some(active);
        }

        let first_offset = first_section_id(sections).and_then(|id| offsets.get(id));
        next.tag_bar_visible =
            next_tag_bar_visibility(previous.tag_bar_visible, first_offset, &self.thresholds);

        tracing::trace!(
            headers = offsets.len(),
            first_offset = ?first_offset,
            "reduced header offsets"
        );

        // Flips of the tag bar change the reserved space above the content, so they
        // must land without animation.
        let transition = if next.tag_bar_visible != previous.tag_bar_visible {
            Transition::Immediate
        } else {
            Transition::Inherited
        };

        self.commit(next, transition)
    }

    /// Reacts to a new section list. The first time the list is non-empty, an unset
    /// active section is seeded with the first section's id.
    pub fn sections_changed(&mut self, sections: &[Section]) -> Option<VisibilityChange> {
        if self.seeded {
            return None;
        }
        let first = first_section_id(sections)?;
        self.seeded = true;

        if self.state.active_section.is_some() {
            return None;
        }

        let next = VisibilityState {
            active_section: Some(first),
            ..self.state
        };
        self.commit(next, Transition::Inherited)
    }

    fn commit(&mut self, next: VisibilityState, transition: Transition) -> Option<VisibilityChange> {
        if next == self.state {
            return None;
        }

        let change = VisibilityChange {
            previous: self.state,
            current: next,
            transition,
        };
        self.state = next;

        if change.active_changed() {
            tracing::debug!(
                from = ?change.previous.active_section,
                to = ?change.current.active_section,
                "active section changed"
            );
        }
        if change.tag_bar_flipped() {
            tracing::debug!(visible = next.tag_bar_visible, "tag bar visibility flipped");
        }

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&change);
        }
        Some(change)
    }
}

/// Picks the in-band header closest to the viewport top.
///
/// Ties keep the first candidate in [`SectionId`] order. Entries outside the band,
/// including NaN offsets, are ignored. Returns `None` when nothing is in band.
pub fn select_active_section(
    offsets: &HeaderOffsetMap,
    thresholds: &VisibilityThresholds,
) -> Option<SectionId> {
    let mut best: Option<(SectionId, f32)> = None;
    for (id, offset) in offsets.iter() {
        if !thresholds.in_active_band(offset) {
            continue;
        }
        match best {
            Some((_, best_offset)) if best_offset <= offset => {}
            _ => best = Some((id, offset)),
        }
    }
    best.map(|(id, _)| id)
}

/// Applies the show/hide hysteresis to the first header's offset.
///
/// A missing offset leaves the state unchanged.
pub fn next_tag_bar_visibility(
    visible: bool,
    first_offset: Option<f32>,
    thresholds: &VisibilityThresholds,
) -> bool {
    match first_offset {
        Some(y) if !visible && y <= thresholds.show => true,
        Some(y) if visible && y > thresholds.hide => false,
        _ => visible,
    }
}
