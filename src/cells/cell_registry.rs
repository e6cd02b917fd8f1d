//! Kind → render function registry.
//!
//! The registry is an explicit instance owned by whoever renders the page; there is no
//! process-wide builder table. Built-in kinds have fast-path builders used whenever no
//! explicit registration exists for them. An explicit registration always wins.

use crate::cells::cell::{format_price, format_rating, CardAccent, CardView, Cell, CellAction, MenuRow};
use crate::domain::{DessertModel, Item, ItemKind, ItemModel, MenuItemModel, PromoModel};
use std::any::Any;
use std::collections::HashMap;

type BuildFn = Box<dyn Fn(&ItemModel) -> Option<Cell>>;

/// Maps item kinds to cell builders.
#[derive(Default)]
pub struct CellRegistry {
    builders: HashMap<ItemKind, BuildFn>,
}

impl std::fmt::Debug for CellRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellRegistry")
            .field("registered", &self.builders.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl CellRegistry {
    /// Creates a registry with no explicit registrations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs or replaces the builder for `kind`.
    ///
    /// The builder only runs when the item's model really is an `M`; any other payload
    /// renders as [`Cell::Empty`].
    pub fn register<M, F>(&mut self, kind: ItemKind, builder: F)
    where
        M: Any,
        F: Fn(&M) -> Cell + 'static,
    {
        self.builders.insert(
            kind,
            Box::new(move |model: &ItemModel| model.downcast_ref::<M>().map(&builder)),
        );
    }

    /// Removes an explicit registration. Built-in kinds fall back to their fast path.
    pub fn unregister(&mut self, kind: &ItemKind) -> bool {
        self.builders.remove(kind).is_some()
    }

    pub fn is_registered(&self, kind: &ItemKind) -> bool {
        self.builders.contains_key(kind)
    }

    /// Builds the cell for `item`, degrading to [`Cell::Empty`] when nothing can render it.
    pub fn build(&self, item: &Item) -> Cell {
        let cell = match self.builders.get(&item.kind) {
            Some(builder) => builder(&item.model),
            None => build_builtin(item),
        };

        cell.unwrap_or_else(|| {
            tracing::trace!(
                item = item.id.raw(),
                kind = item.kind.tag(),
                "no matching builder, rendering empty cell"
            );
            Cell::Empty
        })
    }
}

fn build_builtin(item: &Item) -> Option<Cell> {
    match (&item.kind, &item.model) {
        (ItemKind::MenuItem, ItemModel::Menu(model)) => Some(menu_item_cell(model)),
        (ItemKind::PromoCard, ItemModel::Promo(model)) => Some(promo_card(model)),
        (ItemKind::DessertCard, ItemModel::Dessert(model)) => Some(dessert_card(model)),
        _ => None,
    }
}

pub fn menu_item_cell(model: &MenuItemModel) -> Cell {
    Cell::MenuRow(MenuRow {
        title: model.name.clone(),
        price_label: format_price(model.price),
        rating_label: format_rating(model.rating),
        action: Some(CellAction::AddToCart),
    })
}

pub fn promo_card(model: &PromoModel) -> Cell {
    Cell::Card(CardView {
        title: model.title.clone(),
        accent: CardAccent::Promo,
        image_height: 120.0,
        action: None,
    })
}

pub fn dessert_card(model: &DessertModel) -> Cell {
    Cell::Card(CardView {
        title: model.title.clone(),
        accent: CardAccent::Dessert,
        image_height: 180.0,
        action: Some(CellAction::AddToCart),
    })
}
