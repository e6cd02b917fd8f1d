//! Header panel UI rendering
//!
//! Top toolbar with dataset controls and the cart count.

use crate::app::AppState;
use eframe::egui;
use egui::{Color32, RichText};
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Reload"
    ReloadRequested,
    /// User picked a dataset file
    OpenDatasetRequested(PathBuf),
}

/// Renders the toolbar and, if the last load failed, its error line.
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let loading = state.outlet.is_loading();

        if ui.add_enabled(!loading, egui::Button::new("⟳ Reload")).clicked() {
            interaction = Some(HeaderInteraction::ReloadRequested);
        }

        if ui.add_enabled(!loading, egui::Button::new("📁 Open Dataset")).clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Outlet Datasets", &["json"]);
            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }
            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenDatasetRequested(path));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("🛒 {}", state.outlet.cart_count())).strong());
        });
    });

    if let Some(err) = state.outlet.state().error() {
        ui.colored_label(Color32::RED, format!("Error loading sections: {}", err));
    }

    interaction
}
