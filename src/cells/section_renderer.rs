//! Section → ordered cells.
//!
//! Rendering never sorts, filters or deduplicates: the output has exactly one placed
//! cell per input item, in input order, including empty cells for items the registry
//! could not build. Painters skip empty cells when drawing.

use crate::cells::{Cell, CellRegistry};
use crate::domain::{ItemId, LayoutStyle, Section, SectionId};

/// Direction cells flow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Top to bottom.
    Vertical,
    /// Left to right inside a horizontal scroller.
    Horizontal,
}

/// Size a cell is laid out at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellSize {
    Natural,
    Fixed { width: f32, height: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    pub item_id: ItemId,
    pub size: CellSize,
    pub cell: Cell,
}

/// The rendered body of one section.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub section_id: SectionId,
    pub axis: Axis,
    pub cells: Vec<PlacedCell>,
}

impl RenderedSection {
    /// Cells that actually draw something, in order.
    pub fn visible_cells(&self) -> impl Iterator<Item = &PlacedCell> {
        self.cells.iter().filter(|placed| !placed.cell.is_empty())
    }
}

/// Renders every item of `section` using `registry`.
pub fn render(section: &Section, registry: &CellRegistry) -> RenderedSection {
    let (axis, size) = match section.layout {
        LayoutStyle::List => (Axis::Vertical, CellSize::Natural),
        LayoutStyle::HorizontalCard { width, height } => {
            (Axis::Horizontal, CellSize::Fixed { width, height })
        }
    };

    let cells = section
        .items
        .iter()
        .map(|item| PlacedCell {
            item_id: item.id,
            size,
            cell: registry.build(item),
        })
        .collect();

    RenderedSection {
        section_id: section.id,
        axis,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, ItemKind, ItemModel, PromoModel};

    fn promos(count: usize) -> Vec<Item> {
        (0..count)
            .map(|i| Item::promo(PromoModel { title: format!("Promo #{i}") }))
            .collect()
    }

    fn ids(section: &Section) -> Vec<ItemId> {
        section.items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_order_preserved_for_both_layouts() {
        let registry = CellRegistry::new();
        let layouts = [
            LayoutStyle::List,
            LayoutStyle::HorizontalCard { width: 150.0, height: 200.0 },
        ];

        for layout in layouts {
            for count in [0, 1, 7] {
                let section = Section::new(SectionId::Promos, layout, promos(count));
                let rendered = render(&section, &registry);
                let rendered_ids: Vec<_> = rendered.cells.iter().map(|c| c.item_id).collect();
                assert_eq!(rendered_ids, ids(&section), "layout {:?} count {}", layout, count);
            }
        }
    }

    #[test]
    fn test_horizontal_cards_get_fixed_size() {
        let registry = CellRegistry::new();
        let section = Section::new(
            SectionId::Desserts,
            LayoutStyle::HorizontalCard { width: 150.0, height: 300.0 },
            promos(3),
        );
        let rendered = render(&section, &registry);
        assert_eq!(rendered.axis, Axis::Horizontal);
        assert!(rendered
            .cells
            .iter()
            .all(|c| c.size == CellSize::Fixed { width: 150.0, height: 300.0 }));
    }

    #[test]
    fn test_list_cells_are_natural() {
        let registry = CellRegistry::new();
        let section = Section::new(SectionId::Lunch, LayoutStyle::List, promos(2));
        let rendered = render(&section, &registry);
        assert_eq!(rendered.axis, Axis::Vertical);
        assert!(rendered.cells.iter().all(|c| c.size == CellSize::Natural));
    }

    #[test]
    fn test_duplicates_and_empties_are_kept() {
        let registry = CellRegistry::new();
        let item = Item::promo(PromoModel { title: "Same".into() });
        let broken = Item::new(ItemKind::PromoCard, ItemModel::Raw(serde_json::Value::Null));
        let section = Section::new(
            SectionId::Promos,
            LayoutStyle::List,
            vec![item.clone(), broken, item],
        );

        let rendered = render(&section, &registry);
        assert_eq!(rendered.cells.len(), 3);
        assert_eq!(rendered.cells[0].item_id, rendered.cells[2].item_id);
        assert!(rendered.cells[1].cell.is_empty());
        assert_eq!(rendered.visible_cells().count(), 2);
    }
}
