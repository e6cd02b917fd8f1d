//! Renderable units produced from items.
//!
//! A [`Cell`] describes what to draw for one item without drawing it. The GUI paints
//! cells; tests inspect them directly.

/// Action a cell can trigger when the user interacts with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAction {
    AddToCart,
}

/// Visual family of a card, mapped to colors by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAccent {
    Promo,
    Dessert,
    Neutral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub title: String,
    pub price_label: String,
    pub rating_label: String,
    pub action: Option<CellAction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub accent: CardAccent,
    /// Height of the image placeholder at the top of the card.
    pub image_height: f32,
    pub action: Option<CellAction>,
}

/// One renderable unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Nothing to draw. Produced for unknown kinds and model mismatches.
    Empty,
    MenuRow(MenuRow),
    Card(CardView),
    /// Plain text, mostly for runtime-registered kinds.
    Label(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn action(&self) -> Option<CellAction> {
        match self {
            Cell::MenuRow(row) => row.action,
            Cell::Card(card) => card.action,
            Cell::Empty | Cell::Label(_) => None,
        }
    }
}

/// Formats a price the way menu rows show it, e.g. `Rs 1200`.
pub fn format_price(price: f64) -> String {
    format!("Rs {:.0}", price)
}

/// Formats a rating with one decimal, e.g. `4.5`.
pub fn format_rating(rating: f32) -> String {
    format!("{:.1}", rating)
}
