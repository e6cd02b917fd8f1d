//! I/O modules for section loading.

pub mod section_source;
pub mod async_loader;

// Re-export commonly used types
pub use section_source::{DemoSectionSource, JsonSectionSource, SectionSource};
pub use async_loader::{AsyncLoader, LoadResult};
