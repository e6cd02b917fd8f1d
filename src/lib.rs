pub mod domain;
pub mod cells;
pub mod coordination;
pub mod io;
pub mod outlet;
pub mod tag_bar;
pub mod config;
pub mod error;

// Export domain model
pub use domain::{
    DessertModel, Item, ItemId, ItemKind, ItemModel, LayoutStyle, MenuItemModel, PromoModel,
    Section, SectionId,
};

// Export rendering
pub use cells::{render, Cell, CellAction, CellRegistry, RenderedSection};

// Export scroll coordination
pub use coordination::{
    HeaderOffsetMap, ScrollCoordinator, Transition, VisibilityChange, VisibilityState,
    VisibilityThresholds,
};

// Export loading and the controller
pub use io::{AsyncLoader, DemoSectionSource, JsonSectionSource, LoadResult, SectionSource};
pub use outlet::{LoadOutcome, OutletController, SectionsState};

// Export tag bar
pub use tag_bar::{chip_identifier, TagBar, TagChip, OUTLET_SCROLL_ID, TAG_ID_PREFIX};

// Export configuration and errors
pub use config::OutletConfig;
pub use error::{OutletError, Result};
