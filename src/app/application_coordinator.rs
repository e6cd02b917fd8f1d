//! Application-level coordination.
//!
//! Connects the controller, the scroll coordinator and the host page state: applies
//! finished loads, feeds header measurements to the coordinator, and turns tag taps
//! into animated scrolls.

use crate::app::AppState;
use routlet::{
    HeaderOffsetMap, JsonSectionSource, LoadOutcome, SectionId, TagBar, VisibilityChange,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Coordinates application-level workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Clears the page and reloads from the current source.
    pub fn load_outlet(state: &mut AppState, ctx: &egui::Context) {
        state.page.reset();
        state.outlet.load(ctx);
    }

    /// Switches to a JSON dataset and loads it.
    pub fn open_dataset(state: &mut AppState, path: PathBuf, ctx: &egui::Context) {
        tracing::info!("Opening dataset {:?}", path);
        state.page.reset();
        state.outlet.replace_source(Arc::new(JsonSectionSource::new(path)), ctx);
    }

    /// Applies a finished load. Returns true if the section list changed state.
    ///
    /// Called once per frame in the update loop.
    pub fn check_loading_completion(state: &mut AppState) -> bool {
        match state.outlet.poll() {
            Some(LoadOutcome::Loaded) => {
                state.scroll.sections_changed(state.outlet.sections());
                true
            }
            Some(LoadOutcome::Failed) => true,
            None => false,
        }
    }

    /// Feeds one layout pass of header offsets to the scroll coordinator.
    pub fn apply_header_offsets(
        state: &mut AppState,
        offsets: &HeaderOffsetMap,
    ) -> Option<VisibilityChange> {
        state.scroll.apply_offsets(offsets, state.outlet.sections())
    }

    /// Handles a tap on a tag chip.
    ///
    /// Starts an animated scroll to the section's anchor unless the chip is already
    /// active. The active section itself is left for the coordinator to update once
    /// the header settles.
    pub fn handle_tag_tap(state: &mut AppState, target: SectionId, now: f64) {
        let bar = TagBar::new(state.outlet.sections(), state.scroll.active_section());
        let mut requested = None;
        bar.tap(target, |id| requested = Some(id));

        let Some(id) = requested else {
            return;
        };
        let Some(to) = state.page.anchors().scroll_target(id) else {
            tracing::debug!(section = %id, "no anchor measured yet, ignoring tap");
            return;
        };

        let duration = state.config.scroll_animation_secs;
        state.page.start_scroll(id, to, duration, now);
    }

    pub fn handle_add_to_cart(state: &mut AppState) {
        state.outlet.add_to_cart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routlet::{OutletConfig, OutletController};
    use std::time::{Duration, Instant};

    fn loaded_state() -> AppState {
        let ctx = egui::Context::default();
        let mut state = AppState::with_controller(
            OutletConfig::default(),
            OutletController::with_demo(Duration::ZERO),
        );
        ApplicationCoordinator::load_outlet(&mut state, &ctx);

        let deadline = Instant::now() + Duration::from_secs(5);
        while !ApplicationCoordinator::check_loading_completion(&mut state) {
            assert!(Instant::now() < deadline, "load did not finish");
            std::thread::sleep(Duration::from_millis(5));
        }
        state
    }

    #[test]
    fn test_load_seeds_active_section() {
        let state = loaded_state();
        assert_eq!(state.outlet.sections().len(), 4);
        assert_eq!(state.scroll.active_section(), Some(SectionId::Lunch));
    }

    #[test]
    fn test_offsets_drive_visibility() {
        let mut state = loaded_state();
        let offsets: HeaderOffsetMap = [(SectionId::Lunch, -1.0), (SectionId::Dinner, 300.0)]
            .into_iter()
            .collect();
        let change = ApplicationCoordinator::apply_header_offsets(&mut state, &offsets);
        assert!(state.scroll.tag_bar_visible());
        assert_eq!(change.map(|c| c.transition), Some(routlet::Transition::Immediate));
    }

    #[test]
    fn test_tag_tap_starts_scroll_without_changing_active() {
        let mut state = loaded_state();
        state.page.anchors_mut().record(SectionId::Promos, 900.0);
        state.page.anchors_mut().set_max_scroll(2000.0);

        ApplicationCoordinator::handle_tag_tap(&mut state, SectionId::Promos, 5.0);
        assert!(state.page.is_animating());
        assert_eq!(state.page.scroll_target(), Some(SectionId::Promos));
        assert_eq!(state.scroll.active_section(), Some(SectionId::Lunch));
    }

    #[test]
    fn test_tap_on_active_chip_does_nothing() {
        let mut state = loaded_state();
        state.page.anchors_mut().record(SectionId::Lunch, 260.0);
        state.page.anchors_mut().set_max_scroll(2000.0);

        ApplicationCoordinator::handle_tag_tap(&mut state, SectionId::Lunch, 5.0);
        assert!(!state.page.is_animating());
    }

    #[test]
    fn test_add_to_cart() {
        let mut state = loaded_state();
        ApplicationCoordinator::handle_add_to_cart(&mut state);
        ApplicationCoordinator::handle_add_to_cart(&mut state);
        assert_eq!(state.outlet.cart_count(), 2);
    }
}
