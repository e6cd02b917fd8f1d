//! Colors for the outlet page.
//!
//! Derived from the active egui visuals so light and dark modes both work.

use egui::Color32;
use routlet::cells::CardAccent;

/// Color palette used by the painters.
#[derive(Debug, Clone)]
pub struct Palette {
    pub page_background: Color32,
    pub surface: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub placeholder: Color32,
    pub rating: Color32,
    pub open_now: Color32,
    pub button_fill: Color32,
    pub button_text: Color32,
    pub chip_active_fill: Color32,
    pub chip_active_text: Color32,
    pub chip_border: Color32,
    pub shadow: Color32,
}

impl Palette {
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        let dark = visuals.dark_mode;
        let text = visuals.text_color();
        Self {
            page_background: visuals.extreme_bg_color,
            surface: visuals.panel_fill,
            text,
            text_dim: visuals.weak_text_color(),
            placeholder: Color32::GRAY.gamma_multiply(0.25),
            rating: Color32::from_rgb(230, 180, 20),
            open_now: Color32::from_rgb(52, 168, 83),
            button_fill: visuals.selection.bg_fill,
            button_text: visuals.selection.stroke.color,
            chip_active_fill: if dark { Color32::WHITE } else { Color32::BLACK },
            chip_active_text: if dark { Color32::BLACK } else { Color32::WHITE },
            chip_border: text.gamma_multiply(0.2),
            shadow: Color32::BLACK.gamma_multiply(0.05),
        }
    }

    /// Tint of the image placeholder for a card family.
    pub fn card_accent(&self, accent: CardAccent) -> Color32 {
        match accent {
            CardAccent::Promo => Color32::from_rgb(66, 133, 244).gamma_multiply(0.25),
            CardAccent::Dessert => Color32::from_rgb(233, 30, 99).gamma_multiply(0.2),
            CardAccent::Neutral => self.placeholder,
        }
    }

    /// Color of the "Image" caption inside a card placeholder.
    pub fn card_caption(&self, accent: CardAccent) -> Color32 {
        match accent {
            CardAccent::Promo => Color32::from_rgb(66, 133, 244),
            CardAccent::Dessert => Color32::from_rgb(233, 30, 99),
            CardAccent::Neutral => self.text_dim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_chip_contrasts_in_both_modes() {
        for visuals in [egui::Visuals::light(), egui::Visuals::dark()] {
            let palette = Palette::from_visuals(&visuals);
            assert_ne!(palette.chip_active_fill, palette.chip_active_text);
        }
    }

    #[test]
    fn test_accents_differ_per_family() {
        let palette = Palette::from_visuals(&egui::Visuals::light());
        assert_ne!(
            palette.card_accent(CardAccent::Promo),
            palette.card_accent(CardAccent::Dessert)
        );
    }
}
