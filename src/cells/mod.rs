//! Item and section rendering into drawable cells.

mod cell;
mod cell_registry;
pub mod section_renderer;

pub use cell::{format_price, format_rating, CardAccent, CardView, Cell, CellAction, MenuRow};
pub use cell_registry::{dessert_card, menu_item_cell, promo_card, CellRegistry};
pub use section_renderer::{render, Axis, CellSize, PlacedCell, RenderedSection};
