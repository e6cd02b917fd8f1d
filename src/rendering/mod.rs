//! Rendering subsystem for drawing outlet cells and headers
//!
//! - Cell painting (menu rows, cards, labels)
//! - Section header painting (natural and pinned)
//! - Text utilities (measurement and truncation)

pub mod cell_painter;
pub mod header_painter;
pub mod text_utils;
