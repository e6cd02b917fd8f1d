//! Painting of cells produced by the cell registry.
//!
//! Everything is drawn with painter primitives inside rects allocated from the
//! surrounding layout, so cell sizes stay exactly what the section renderer asked for.

use crate::presentation::Palette;
use crate::rendering::text_utils::fit_text;
use eframe::egui;
use routlet::cells::{CardView, Cell, CellAction, CellSize, MenuRow, PlacedCell};

/// Height of a menu row including its vertical padding.
pub const MENU_ROW_HEIGHT: f32 = 72.0;

const MENU_IMAGE_SIZE: f32 = 56.0;
const CARD_PADDING: f32 = 8.0;
const BUTTON_SIZE: egui::Vec2 = egui::vec2(96.0, 26.0);

/// Paints one placed cell and returns the action the user triggered, if any.
pub fn paint_cell(ui: &mut egui::Ui, placed: &PlacedCell, palette: &Palette) -> Option<CellAction> {
    let id = ui.id().with(("cell", placed.item_id.raw()));
    match (&placed.cell, placed.size) {
        (Cell::Empty, _) => None,
        (Cell::MenuRow(row), _) => paint_menu_row(ui, id, row, palette),
        (Cell::Card(card), CellSize::Fixed { width, height }) => {
            paint_card(ui, id, card, egui::vec2(width, height), palette)
        }
        (Cell::Card(card), CellSize::Natural) => {
            let size = egui::vec2(ui.available_width(), card.image_height + 90.0);
            paint_card(ui, id, card, size, palette)
        }
        (Cell::Label(text), size) => {
            paint_label(ui, text, size, palette);
            None
        }
    }
}

fn paint_menu_row(
    ui: &mut egui::Ui,
    id: egui::Id,
    row: &MenuRow,
    palette: &Palette,
) -> Option<CellAction> {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), MENU_ROW_HEIGHT),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(rect) {
        return None;
    }

    let painter = ui.painter();
    painter.rect_filled(rect, 10.0, palette.surface);

    let image = egui::Rect::from_min_size(
        rect.left_top() + egui::vec2(12.0, 8.0),
        egui::vec2(MENU_IMAGE_SIZE, MENU_IMAGE_SIZE),
    );
    painter.rect_filled(image, 8.0, palette.placeholder);

    let button = egui::Rect::from_min_size(
        egui::pos2(rect.right() - 12.0 - 56.0, rect.top() + 8.0),
        egui::vec2(56.0, 26.0),
    );

    let text_left = image.right() + 12.0;
    let text_width = button.left() - 8.0 - text_left;
    let title_font = egui::FontId::proportional(15.0);
    let small_font = egui::FontId::proportional(12.0);

    let title = fit_text(&row.title, text_width, &title_font, painter);
    painter.text(
        egui::pos2(text_left, rect.top() + 10.0),
        egui::Align2::LEFT_TOP,
        title,
        title_font,
        palette.text,
    );
    painter.text(
        egui::pos2(text_left, rect.top() + 32.0),
        egui::Align2::LEFT_TOP,
        &row.price_label,
        small_font.clone(),
        palette.text_dim,
    );
    painter.text(
        egui::pos2(text_left, rect.top() + 50.0),
        egui::Align2::LEFT_TOP,
        format!("★ {}", row.rating_label),
        small_font,
        palette.rating,
    );

    let action = row.action?;
    paint_button(ui, id.with("add"), button, "Add", palette).then_some(action)
}

fn paint_card(
    ui: &mut egui::Ui,
    id: egui::Id,
    card: &CardView,
    size: egui::Vec2,
    palette: &Palette,
) -> Option<CellAction> {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return None;
    }

    let painter = ui.painter();
    painter.rect_filled(rect.translate(egui::vec2(0.0, 1.0)), 12.0, palette.shadow);
    painter.rect_filled(rect, 12.0, palette.surface);

    let inner = rect.shrink(CARD_PADDING);
    let image_height = card.image_height.min(inner.height() * 0.7);
    let image = egui::Rect::from_min_size(inner.left_top(), egui::vec2(inner.width(), image_height));
    painter.rect_filled(image, 10.0, palette.card_accent(card.accent));
    painter.text(
        image.center(),
        egui::Align2::CENTER_CENTER,
        "Image",
        egui::FontId::proportional(13.0),
        palette.card_caption(card.accent),
    );

    let title_font = egui::FontId::proportional(13.0);
    let title = fit_text(&card.title, inner.width(), &title_font, painter);
    painter.text(
        egui::pos2(inner.left(), image.bottom() + 8.0),
        egui::Align2::LEFT_TOP,
        title,
        title_font,
        palette.text,
    );

    let action = card.action?;
    let button = egui::Rect::from_min_size(
        egui::pos2(inner.left(), inner.bottom() - BUTTON_SIZE.y),
        egui::vec2(BUTTON_SIZE.x.min(inner.width()), BUTTON_SIZE.y),
    );
    paint_button(ui, id.with("add"), button, "Add to cart", palette).then_some(action)
}

fn paint_label(ui: &mut egui::Ui, text: &str, size: CellSize, palette: &Palette) {
    let size = match size {
        CellSize::Fixed { width, height } => egui::vec2(width, height),
        CellSize::Natural => egui::vec2(ui.available_width(), 32.0),
    };
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(rect, 8.0, palette.surface);
    ui.painter().text(
        rect.left_center() + egui::vec2(12.0, 0.0),
        egui::Align2::LEFT_CENTER,
        text,
        egui::FontId::proportional(13.0),
        palette.text_dim,
    );
}

/// Paints a rounded button and reports whether it was clicked.
fn paint_button(ui: &mut egui::Ui, id: egui::Id, rect: egui::Rect, label: &str, palette: &Palette) -> bool {
    let response = ui.interact(rect, id, egui::Sense::click());
    let fill = if response.hovered() {
        palette.button_fill.gamma_multiply(0.85)
    } else {
        palette.button_fill
    };

    let painter = ui.painter();
    painter.rect_filled(rect, 6.0, fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(12.0),
        palette.button_text,
    );

    response.clicked()
}
