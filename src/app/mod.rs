//! Application-level modules for the outlet viewer.
//!
//! This module contains the application coordinator and centralized state.

mod app_state;
mod application_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
