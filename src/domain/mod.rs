//! Domain model for the outlet page.
//!
//! Immutable value types only:
//! - Section identifiers (page order, display names)
//! - Items with kind-tagged models
//! - Layout styles and sections
//! - The demo fixture

mod section_id;
mod item;
mod layout_style;
mod section;
pub mod demo;

pub use section_id::SectionId;
pub use item::{DessertModel, Item, ItemId, ItemKind, ItemModel, MenuItemModel, PromoModel};
pub use layout_style::LayoutStyle;
pub use section::{first_section_id, Section};
