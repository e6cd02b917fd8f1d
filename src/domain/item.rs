//! Items and their kind-specific models.
//!
//! An item pairs a [`ItemKind`] tag with an [`ItemModel`] payload. Built-in kinds carry
//! typed payloads; data decoded from loosely-typed sources may keep its raw JSON, and
//! runtime-registered kinds carry a type-erased payload. Nothing here checks that the
//! tag and payload agree: that pairing is enforced at render time by the cell registry,
//! which degrades a mismatch to an empty cell.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Allocates a fresh identifier.
    pub fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Tag selecting the model shape and the render function for an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    MenuItem,
    PromoCard,
    DessertCard,
    /// Kind unknown at compile time, resolved only through the registry.
    Custom(String),
}

impl ItemKind {
    /// Maps a dataset tag to a kind. Unrecognized tags become custom kinds.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "menu_item" | "menuItem" => ItemKind::MenuItem,
            "promo_card" | "promoCard" => ItemKind::PromoCard,
            "dessert_card" | "dessertCard" => ItemKind::DessertCard,
            other => ItemKind::Custom(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            ItemKind::MenuItem => "menu_item",
            ItemKind::PromoCard => "promo_card",
            ItemKind::DessertCard => "dessert_card",
            ItemKind::Custom(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemModel {
    pub name: String,
    /// Price in whole rupees.
    pub price: f64,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoModel {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DessertModel {
    pub title: String,
}

/// Kind-specific payload of an item.
#[derive(Clone)]
pub enum ItemModel {
    Menu(MenuItemModel),
    Promo(PromoModel),
    Dessert(DessertModel),
    /// Undecoded payload from an external source.
    Raw(serde_json::Value),
    /// Payload for a runtime-registered kind.
    Custom(Arc<dyn Any + Send + Sync>),
}

impl ItemModel {
    pub fn custom<M: Any + Send + Sync>(model: M) -> Self {
        ItemModel::Custom(Arc::new(model))
    }

    /// The concrete model behind this payload, for checked downcasting.
    pub fn as_any(&self) -> &dyn Any {
        match self {
            ItemModel::Menu(model) => model,
            ItemModel::Promo(model) => model,
            ItemModel::Dessert(model) => model,
            ItemModel::Raw(value) => value,
            ItemModel::Custom(payload) => payload.as_ref(),
        }
    }

    /// Returns the payload as `M` if that is its runtime shape.
    pub fn downcast_ref<M: Any>(&self) -> Option<&M> {
        self.as_any().downcast_ref::<M>()
    }
}

impl fmt::Debug for ItemModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemModel::Menu(model) => f.debug_tuple("Menu").field(model).finish(),
            ItemModel::Promo(model) => f.debug_tuple("Promo").field(model).finish(),
            ItemModel::Dessert(model) => f.debug_tuple("Dessert").field(model).finish(),
            ItemModel::Raw(value) => f.debug_tuple("Raw").field(value).finish(),
            ItemModel::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A single entry of a section.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub model: ItemModel,
}

impl Item {
    pub fn new(kind: ItemKind, model: ItemModel) -> Self {
        Self {
            id: ItemId::next(),
            kind,
            model,
        }
    }

    pub fn menu(model: MenuItemModel) -> Self {
        Self::new(ItemKind::MenuItem, ItemModel::Menu(model))
    }

    pub fn promo(model: PromoModel) -> Self {
        Self::new(ItemKind::PromoCard, ItemModel::Promo(model))
    }

    pub fn dessert(model: DessertModel) -> Self {
        Self::new(ItemKind::DessertCard, ItemModel::Dessert(model))
    }
}
