//! Tag bar UI rendering
//!
//! Horizontally scrollable row of capsule chips, one per section.

use crate::presentation::Palette;
use crate::rendering::text_utils::fit_text;
use eframe::egui;
use routlet::{SectionId, TagBar, TagChip};

const CHIP_HEIGHT: f32 = 26.0;
const CHIP_PADDING_X: f32 = 12.0;
const CHIP_SPACING: f32 = 8.0;
const MAX_CHIP_WIDTH: f32 = 180.0;

/// Result of user interaction with the tag bar
pub enum TagBarInteraction {
    /// A chip was tapped
    ChipTapped(SectionId),
}

/// Renders the tag bar. `opacity` fades the whole bar; 0 skips drawing entirely.
pub fn render_tag_bar(
    ui: &mut egui::Ui,
    bar: &TagBar<'_>,
    opacity: f32,
    palette: &Palette,
) -> Option<TagBarInteraction> {
    if opacity <= 0.0 {
        return None;
    }
    ui.set_opacity(opacity);

    let mut interaction = None;
    egui::ScrollArea::horizontal()
        .id_salt("tag_bar_scroll")
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .show(ui, |ui| {
            ui.horizontal_centered(|ui| {
                ui.add_space(CHIP_SPACING);
                ui.spacing_mut().item_spacing.x = CHIP_SPACING;
                for chip in bar.chips() {
                    if paint_chip(ui, &chip, palette) {
                        interaction = Some(TagBarInteraction::ChipTapped(chip.section_id));
                    }
                }
            });
        });
    interaction
}

/// Paints one capsule chip; returns true when clicked.
fn paint_chip(ui: &mut egui::Ui, chip: &TagChip, palette: &Palette) -> bool {
    let font_id = egui::FontId::proportional(13.0);
    let label = fit_text(&chip.label, MAX_CHIP_WIDTH, &font_id, ui.painter());
    let text_width = ui
        .painter()
        .layout_no_wrap(label.clone(), font_id.clone(), palette.text)
        .size()
        .x;

    let size = egui::vec2(text_width + 2.0 * CHIP_PADDING_X, CHIP_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let response = ui.interact(rect, egui::Id::new(chip.identifier.as_str()), egui::Sense::click());

    let radius = CHIP_HEIGHT / 2.0;
    let painter = ui.painter();
    let (fill, border, text) = if chip.is_active {
        (palette.chip_active_fill, palette.chip_active_fill, palette.chip_active_text)
    } else if response.hovered() {
        (palette.chip_border, palette.chip_border, palette.text)
    } else {
        (egui::Color32::TRANSPARENT, palette.chip_border, palette.text)
    };

    painter.rect_filled(rect, radius, fill);
    painter.rect_stroke(rect, radius, egui::Stroke::new(1.0, border), egui::StrokeKind::Inside);
    painter.text(rect.center(), egui::Align2::CENTER_CENTER, label, font_id, text);

    response.clicked()
}
