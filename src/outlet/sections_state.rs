//! Lifecycle of the outlet's section list.

use crate::domain::Section;

/// Where the section list is in its lifecycle.
///
/// `Loading`, an empty `Loaded` list and `Failed` are all distinct, so a failed fetch
/// never looks like a page that is still loading.
#[derive(Debug, Clone, Default)]
pub enum SectionsState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A load is in flight; the list is empty.
    Loading,
    Loaded(Vec<Section>),
    Failed(String),
}

impl SectionsState {
    /// The current sections; empty unless loaded.
    pub fn sections(&self) -> &[Section] {
        match self {
            SectionsState::Loaded(sections) => sections,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SectionsState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SectionsState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short label for the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            SectionsState::Idle => "Idle",
            SectionsState::Loading => "Loading…",
            SectionsState::Loaded(sections) if sections.is_empty() => "No sections",
            SectionsState::Loaded(_) => "Loaded",
            SectionsState::Failed(_) => "Load failed",
        }
    }
}
