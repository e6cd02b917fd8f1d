//! Centralized application state for the outlet viewer.
//!
//! Composes the library's controller and coordinator with host-side page state, each
//! keeping its own invariants behind intent-revealing methods.

use crate::state::PageState;
use routlet::cells::Cell;
use routlet::{CellRegistry, ItemKind, OutletConfig, OutletController, ScrollCoordinator};

/// Main application state.
pub struct AppState {
    /// Runtime configuration
    pub config: OutletConfig,

    /// Section list, loading and cart
    pub outlet: OutletController,

    /// Active section and tag bar visibility
    pub scroll: ScrollCoordinator,

    /// Item kind → cell builders
    pub registry: CellRegistry,

    /// Anchors, scroll offset and scroll animation
    pub page: PageState,
}

impl AppState {
    /// Creates the state for the demo outlet.
    pub fn new(config: OutletConfig) -> Self {
        let outlet = OutletController::with_demo(config.load_delay());
        Self::with_controller(config, outlet)
    }

    pub fn with_controller(config: OutletConfig, outlet: OutletController) -> Self {
        Self {
            scroll: ScrollCoordinator::with_thresholds(config.thresholds()),
            registry: default_registry(),
            page: PageState::new(),
            outlet,
            config,
        }
    }
}

/// Registry with the runtime kinds JSON datasets may use.
///
/// Built-in kinds render through their fast paths and need no registration.
pub fn default_registry() -> CellRegistry {
    let mut registry = CellRegistry::new();
    registry.register(ItemKind::Custom("note".to_string()), |value: &serde_json::Value| {
        match value.get("text").and_then(|text| text.as_str()) {
            Some(text) => Cell::Label(text.to_string()),
            None => Cell::Empty,
        }
    });
    registry
}
