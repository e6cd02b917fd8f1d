//! Section header painting.

use crate::presentation::Palette;
use eframe::egui;

/// Height of a section header.
pub const SECTION_HEADER_HEIGHT: f32 = 40.0;

/// Paints a section header with an opaque background into `rect`.
pub fn paint_section_header(painter: &egui::Painter, rect: egui::Rect, title: &str, palette: &Palette) {
    painter.rect_filled(rect, 0.0, palette.surface);
    painter.text(
        rect.left_center() + egui::vec2(16.0, 0.0),
        egui::Align2::LEFT_CENTER,
        title,
        egui::FontId::proportional(19.0),
        palette.text,
    );
}
