//! Presentation layer for visual styling.
//!
//! Colors only; what to draw is decided by the library's cells.

pub mod palette;

pub use palette::Palette;
