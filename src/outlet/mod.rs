//! The outlet page controller and its section list state.

mod sections_state;
mod outlet_controller;

pub use sections_state::SectionsState;
pub use outlet_controller::{LoadOutcome, OutletController};
