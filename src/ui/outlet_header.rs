//! The outlet's own header block at the top of the page.

use crate::presentation::Palette;
use eframe::egui;

const IMAGE_HEIGHT: f32 = 160.0;

/// Paints the outlet image placeholder, opening state, name and address.
pub fn render_outlet_header(ui: &mut egui::Ui, palette: &Palette) {
    egui::Frame::default()
        .inner_margin(egui::Margin::symmetric(16, 16))
        .show(ui, |ui| {
            let (image, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), IMAGE_HEIGHT),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(image, 12.0, palette.placeholder);
            ui.painter().text(
                image.center(),
                egui::Align2::CENTER_CENTER,
                "Outlet Image",
                egui::FontId::proportional(14.0),
                palette.text_dim,
            );

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let (dot, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                ui.painter().circle_filled(dot.center(), 4.0, palette.open_now);
                ui.label(egui::RichText::new("Open now").color(palette.open_now));
            });
            ui.label(egui::RichText::new("Demo Outlet").size(22.0).strong());
            ui.label(egui::RichText::new("123, Flower Road, Colombo").color(palette.text_dim));
        });
    ui.add_space(8.0);
}
