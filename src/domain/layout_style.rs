//! Section layout policies.

use serde::{Deserialize, Serialize};

/// How a section arranges its items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum LayoutStyle {
    /// Top to bottom, each item at its natural height.
    List,
    /// Left to right in a horizontal scroller, each item forced to exactly this size.
    HorizontalCard { width: f32, height: f32 },
}

impl LayoutStyle {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, LayoutStyle::HorizontalCard { .. })
    }
}
