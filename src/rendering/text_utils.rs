//! Text measurement helpers shared by the painters.

use eframe::egui;

const ELLIPSIS: &str = "…";

fn text_width(painter: &egui::Painter, text: &str, font_id: &egui::FontId) -> f32 {
    painter
        .layout_no_wrap(text.to_string(), font_id.clone(), egui::Color32::WHITE)
        .size()
        .x
}

/// Shortens `text` with a trailing ellipsis until it fits `max_width`.
pub fn fit_text(
    text: &str,
    max_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    if max_width <= 0.0 {
        return String::new();
    }
    if text_width(painter, text, font_id) <= max_width {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut low = 0;
    let mut high = chars.len();
    while low < high {
        let mid = (low + high + 1) / 2;
        let candidate: String = chars[..mid].iter().collect::<String>() + ELLIPSIS;
        if text_width(painter, &candidate, font_id) <= max_width {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    if low == 0 {
        return String::new();
    }
    chars[..low].iter().collect::<String>() + ELLIPSIS
}
