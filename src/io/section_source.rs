//! Sources the outlet controller can load sections from.
//!
//! `fetch` is blocking and runs on the loader's background thread.

use crate::domain::demo::demo_sections;
use crate::domain::{
    DessertModel, Item, ItemKind, ItemModel, LayoutStyle, MenuItemModel, PromoModel, Section,
    SectionId,
};
use crate::error::{OutletError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Something that can produce the outlet's section list.
pub trait SectionSource: Send + Sync {
    /// Short description for logs and the status bar.
    fn describe(&self) -> String;

    /// Produces the sections, blocking until they are available.
    fn fetch(&self) -> Result<Vec<Section>>;
}

/// The fixed demo fixture, delivered after a simulated network delay.
#[derive(Debug, Clone)]
pub struct DemoSectionSource {
    delay: Duration,
}

impl DemoSectionSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl SectionSource for DemoSectionSource {
    fn describe(&self) -> String {
        "demo outlet".to_string()
    }

    fn fetch(&self) -> Result<Vec<Section>> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(demo_sections())
    }
}

/// Sections read from a JSON dataset file.
///
/// ```json
/// { "sections": [
///     { "id": "lunch", "layout": { "style": "list" },
///       "items": [ { "kind": "menu_item",
///                    "model": { "name": "Kottu Roti", "price": 950, "rating": 4.3 } } ] }
/// ] }
/// ```
#[derive(Debug, Clone)]
pub struct JsonSectionSource {
    path: PathBuf,
}

impl JsonSectionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SectionSource for JsonSectionSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<Section>> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| OutletError::Io {
            path: self.path.clone(),
            source,
        })?;
        let dataset: RawDataset =
            serde_json::from_str(&text).map_err(|source| OutletError::Json {
                path: self.path.clone(),
                source,
            })?;
        dataset.into_sections()
    }
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
struct RawSection {
    id: SectionId,
    #[serde(default)]
    title: Option<String>,
    #[serde(default = "default_layout")]
    layout: LayoutStyle,
    #[serde(default = "default_sticky")]
    sticky: bool,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    kind: String,
    #[serde(default)]
    model: serde_json::Value,
}

fn default_layout() -> LayoutStyle {
    LayoutStyle::List
}

fn default_sticky() -> bool {
    true
}

impl RawDataset {
    fn into_sections(self) -> Result<Vec<Section>> {
        let mut seen = HashSet::new();
        let mut sections = Vec::with_capacity(self.sections.len());

        for raw in self.sections {
            if !seen.insert(raw.id) {
                return Err(OutletError::Dataset(format!(
                    "section '{}' appears more than once",
                    raw.id.key()
                )));
            }
            if let LayoutStyle::HorizontalCard { width, height } = raw.layout {
                if !(width > 0.0 && height > 0.0) {
                    return Err(OutletError::Dataset(format!(
                        "section '{}' has a non-positive card size",
                        raw.id.key()
                    )));
                }
            }

            sections.push(Section {
                id: raw.id,
                header_title: raw
                    .title
                    .unwrap_or_else(|| raw.id.display_name().to_string()),
                layout: raw.layout,
                is_sticky: raw.sticky,
                items: raw.items.into_iter().map(RawItem::into_item).collect(),
            });
        }
        Ok(sections)
    }
}

impl RawItem {
    /// Decodes the model for known kinds. A model that does not fit its kind stays raw
    /// and later renders as an empty cell.
    fn into_item(self) -> Item {
        let kind = ItemKind::from_tag(&self.kind);
        let model = match kind {
            ItemKind::MenuItem => decode::<MenuItemModel>(self.model, ItemModel::Menu),
            ItemKind::PromoCard => decode::<PromoModel>(self.model, ItemModel::Promo),
            ItemKind::DessertCard => decode::<DessertModel>(self.model, ItemModel::Dessert),
            ItemKind::Custom(_) => ItemModel::Raw(self.model),
        };
        Item::new(kind, model)
    }
}

fn decode<M>(value: serde_json::Value, wrap: fn(M) -> ItemModel) -> ItemModel
where
    M: for<'de> Deserialize<'de>,
{
    match serde_json::from_value::<M>(value.clone()) {
        Ok(model) => wrap(model),
        Err(err) => {
            tracing::trace!("keeping undecodable item model raw: {}", err);
            ItemModel::Raw(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_demo_source_without_delay() {
        let sections = DemoSectionSource::new(Duration::ZERO).fetch().unwrap();
        assert_eq!(sections.len(), 4);
    }

    #[test]
    fn test_json_source_decodes_known_kinds() {
        let file = write_dataset(
            r#"{ "sections": [
                { "id": "lunch", "items": [
                    { "kind": "menu_item", "model": { "name": "Veggie Wrap", "price": 800, "rating": 4.0 } }
                ] },
                { "id": "promos", "title": "Deals",
                  "layout": { "style": "horizontal_card", "width": 150, "height": 200 },
                  "items": [ { "kind": "promo_card", "model": { "title": "Promo #1" } } ] }
            ] }"#,
        );

        let sections = JsonSectionSource::new(file.path()).fetch().unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].header_title, "Lunch");
        assert_eq!(sections[0].layout, LayoutStyle::List);
        assert_eq!(sections[1].header_title, "Deals");
        assert_eq!(
            sections[1].layout,
            LayoutStyle::HorizontalCard { width: 150.0, height: 200.0 }
        );
        assert!(matches!(sections[0].items[0].model, ItemModel::Menu(_)));
        assert!(matches!(sections[1].items[0].model, ItemModel::Promo(_)));
    }

    #[test]
    fn test_json_source_keeps_mismatched_models_raw() {
        let file = write_dataset(
            r#"{ "sections": [ { "id": "dinner", "items": [
                { "kind": "menu_item", "model": { "title": "not a menu item" } },
                { "kind": "banner", "model": { "text": "Free delivery" } }
            ] } ] }"#,
        );

        let sections = JsonSectionSource::new(file.path()).fetch().unwrap();
        let items = &sections[0].items;
        assert_eq!(items[0].kind, ItemKind::MenuItem);
        assert!(matches!(items[0].model, ItemModel::Raw(_)));
        assert_eq!(items[1].kind, ItemKind::Custom("banner".into()));
    }

    #[test]
    fn test_duplicate_section_ids_rejected() {
        let file = write_dataset(r#"{ "sections": [ { "id": "lunch" }, { "id": "lunch" } ] }"#);
        let err = JsonSectionSource::new(file.path()).fetch().unwrap_err();
        assert!(matches!(err, OutletError::Dataset(_)));
    }

    #[test]
    fn test_unknown_section_id_is_json_error() {
        let file = write_dataset(r#"{ "sections": [ { "id": "brunch" } ] }"#);
        let err = JsonSectionSource::new(file.path()).fetch().unwrap_err();
        assert!(matches!(err, OutletError::Json { .. }));
    }
}
