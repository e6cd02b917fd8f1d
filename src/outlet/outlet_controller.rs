//! Outlet page controller: section list, loading and the cart counter.

use crate::domain::Section;
use crate::io::{AsyncLoader, DemoSectionSource, LoadResult, SectionSource};
use crate::outlet::SectionsState;
use eframe::egui;
use std::sync::Arc;
use std::time::Duration;

/// What a poll of the controller did to the section list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Owns the outlet's sections and cart count.
///
/// All methods run on the UI thread. Loads happen through an [`AsyncLoader`]; dropping
/// the controller while a load is pending turns that load's completion into a no-op.
pub struct OutletController {
    sections: SectionsState,
    cart_count: u64,
    loader: AsyncLoader,
    source: Arc<dyn SectionSource>,
}

impl OutletController {
    pub fn new(source: Arc<dyn SectionSource>) -> Self {
        Self {
            sections: SectionsState::Idle,
            cart_count: 0,
            loader: AsyncLoader::new(),
            source,
        }
    }

    /// Controller backed by the demo fixture with the given simulated delay.
    pub fn with_demo(delay: Duration) -> Self {
        Self::new(Arc::new(DemoSectionSource::new(delay)))
    }

    // ===== Queries =====

    pub fn state(&self) -> &SectionsState {
        &self.sections
    }

    pub fn sections(&self) -> &[Section] {
        self.sections.sections()
    }

    pub fn cart_count(&self) -> u64 {
        self.cart_count
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    // ===== Actions =====

    /// Clears the section list and starts fetching it again.
    pub fn load(&mut self, ctx: &egui::Context) {
        self.sections = SectionsState::Loading;
        self.loader.start_load(Arc::clone(&self.source), ctx);
    }

    /// Switches to another source and loads from it.
    pub fn replace_source(&mut self, source: Arc<dyn SectionSource>, ctx: &egui::Context) {
        self.source = source;
        self.load(ctx);
    }

    /// Applies a finished load, if there is one. Call once per frame.
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        match self.loader.check_completion() {
            LoadResult::Success { sections, .. } => {
                self.sections = SectionsState::Loaded(sections);
                Some(LoadOutcome::Loaded)
            }
            LoadResult::Error(message) => {
                self.sections = SectionsState::Failed(message);
                Some(LoadOutcome::Failed)
            }
            LoadResult::None => None,
        }
    }

    /// Adds one item to the cart. No validation, no upper bound.
    pub fn add_to_cart(&mut self) {
        self.cart_count = self.cart_count.saturating_add(1);
        tracing::debug!(cart_count = self.cart_count, "added to cart");
    }
}

impl Drop for OutletController {
    fn drop(&mut self) {
        self.loader.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Instant;

    fn wait_for_load(controller: &mut OutletController) -> Option<LoadOutcome> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(outcome) = controller.poll() {
                return Some(outcome);
            }
            thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_load_clears_then_populates() {
        let ctx = egui::Context::default();
        let mut controller = OutletController::with_demo(Duration::from_millis(30));
        assert!(matches!(controller.state(), SectionsState::Idle));

        controller.load(&ctx);
        assert!(controller.state().is_loading());
        assert!(controller.sections().is_empty());

        assert_eq!(wait_for_load(&mut controller), Some(LoadOutcome::Loaded));
        let sizes: Vec<_> = controller.sections().iter().map(|s| s.items.len()).collect();
        assert_eq!(sizes, vec![3, 3, 8, 8]);
    }

    #[test]
    fn test_reload_clears_previous_sections() {
        let ctx = egui::Context::default();
        let mut controller = OutletController::with_demo(Duration::ZERO);
        controller.load(&ctx);
        wait_for_load(&mut controller);
        assert_eq!(controller.sections().len(), 4);

        controller.load(&ctx);
        assert!(controller.sections().is_empty());
    }

    #[test]
    fn test_add_to_cart_increments_by_one() {
        let mut controller = OutletController::with_demo(Duration::ZERO);
        for expected in 1..=5 {
            controller.add_to_cart();
            assert_eq!(controller.cart_count(), expected);
        }
    }

    #[test]
    fn test_drop_while_loading_is_safe() {
        let ctx = egui::Context::default();
        let mut controller = OutletController::with_demo(Duration::from_millis(20));
        controller.load(&ctx);
        drop(controller);

        // The background fetch finishes after the controller is gone.
        thread::sleep(Duration::from_millis(60));
    }

    #[test]
    fn test_replaced_source_wins_over_pending_load() {
        let ctx = egui::Context::default();
        let mut controller = OutletController::with_demo(Duration::from_millis(150));
        controller.load(&ctx);
        controller.replace_source(Arc::new(DemoSectionSource::new(Duration::ZERO)), &ctx);

        assert_eq!(wait_for_load(&mut controller), Some(LoadOutcome::Loaded));
        assert_eq!(controller.sections().len(), 4);

        // The first fetch completes later without touching the loaded state.
        thread::sleep(Duration::from_millis(300));
        assert_eq!(controller.poll(), None);
        assert!(!controller.is_loading());
        assert_eq!(controller.sections().len(), 4);
    }
}
