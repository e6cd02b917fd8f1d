//! The fixed demo dataset shown by the outlet page.

use crate::domain::{
    DessertModel, Item, LayoutStyle, MenuItemModel, PromoModel, Section, SectionId,
};

/// Number of cards in each horizontal demo carousel.
pub const DEMO_CARDS_PER_CAROUSEL: usize = 8;

fn menu(name: &str, price: f64, rating: f32) -> Item {
    Item::menu(MenuItemModel {
        name: name.to_string(),
        price,
        rating,
    })
}

/// Builds the four demo sections: two menu lists followed by two card carousels.
pub fn demo_sections() -> Vec<Section> {
    let lunch = vec![
        menu("Chicken Fried Rice", 1200.0, 4.5),
        menu("Kottu Roti", 950.0, 4.3),
        menu("Veggie Wrap", 800.0, 4.0),
    ];

    let dinner = vec![
        menu("Grilled Chicken", 1600.0, 4.6),
        menu("Maggie Noodles", 1450.0, 4.4),
        menu("Beef Steak", 2500.0, 4.7),
    ];

    let promos = (1..=DEMO_CARDS_PER_CAROUSEL)
        .map(|i| Item::promo(PromoModel { title: format!("Promo #{i}") }))
        .collect();

    let desserts = (1..=DEMO_CARDS_PER_CAROUSEL)
        .map(|i| Item::dessert(DessertModel { title: format!("Dessert #{i}") }))
        .collect();

    vec![
        Section::new(SectionId::Lunch, LayoutStyle::List, lunch),
        Section::new(SectionId::Dinner, LayoutStyle::List, dinner),
        Section::new(
            SectionId::Promos,
            LayoutStyle::HorizontalCard { width: 150.0, height: 200.0 },
            promos,
        ),
        Section::new(
            SectionId::Desserts,
            LayoutStyle::HorizontalCard { width: 150.0, height: 300.0 },
            desserts,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemKind;

    #[test]
    fn test_demo_shape() {
        let sections = demo_sections();
        let ids: Vec<_> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());

        let sizes: Vec<_> = sections.iter().map(|s| s.items.len()).collect();
        assert_eq!(sizes, vec![3, 3, 8, 8]);

        assert_eq!(sections[0].layout, LayoutStyle::List);
        assert_eq!(
            sections[3].layout,
            LayoutStyle::HorizontalCard { width: 150.0, height: 300.0 }
        );
        assert!(sections.iter().all(|s| s.is_sticky));
    }

    #[test]
    fn test_demo_kinds_match_sections() {
        let sections = demo_sections();
        assert!(sections[1].items.iter().all(|i| i.kind == ItemKind::MenuItem));
        assert!(sections[2].items.iter().all(|i| i.kind == ItemKind::PromoCard));
        assert!(sections[3].items.iter().all(|i| i.kind == ItemKind::DessertCard));
        assert_eq!(
            sections[2].items[0].model.downcast_ref::<PromoModel>(),
            Some(&PromoModel { title: "Promo #1".into() })
        );
    }
}
