//! State management modules for the outlet viewer.
//!
//! State-only logic (no UI concerns):
//! - Page state (anchors, scroll offset, scroll animation)

mod page_state;

pub use page_state::PageState;
