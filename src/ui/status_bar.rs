//! Status bar UI rendering
//!
//! Bottom bar showing the data source, load state and scroll state.

use crate::app::AppState;
use eframe::egui;
use egui::RichText;

/// Renders the status bar.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(state.outlet.source_description()).strong());
        ui.label(RichText::new("|").strong());
        ui.label(state.outlet.state().label());

        let sections = state.outlet.sections();
        if !sections.is_empty() {
            let items: usize = sections.iter().map(|s| s.items.len()).sum();
            ui.label(RichText::new("|").strong());
            ui.label(format!("Sections: {} | Items: {}", sections.len(), items));
        }

        let visibility = state.scroll.state();
        let active = visibility
            .active_section
            .map(|id| id.display_name())
            .unwrap_or("none");
        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "Active: {} | Tag bar: {}",
            active,
            if visibility.tag_bar_visible { "shown" } else { "hidden" }
        ));
    });
}
