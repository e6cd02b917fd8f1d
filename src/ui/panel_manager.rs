//! Panel orchestration and layout management.
//!
//! Lays out the toolbar, the tag bar strip, the status bar and the outlet page, and
//! collects their interactions for the application coordinator.

use crate::app::AppState;
use crate::presentation::Palette;
use crate::ui::{header, outlet_page, status_bar, tag_bar};
use routlet::cells::CellAction;
use routlet::{HeaderOffsetMap, SectionId, TagBar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User clicked "Reload"
    ReloadRequested,
    /// User picked a dataset file
    OpenDatasetRequested(std::path::PathBuf),
    /// A tag chip was tapped
    TagTapped(SectionId),
    /// "Add" was clicked on a cell
    AddToCart,
}

/// Everything one frame of panels produced.
pub struct PanelOutput {
    pub interaction: Option<PanelInteraction>,
    /// Header offsets measured by the outlet page this frame
    pub header_offsets: HeaderOffsetMap,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> PanelOutput {
        let mut interaction: Option<PanelInteraction> = None;
        let palette = Palette::from_visuals(&ctx.style().visuals);
        let now = ctx.input(|i| i.time);

        // Toolbar at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::ReloadRequested => PanelInteraction::ReloadRequested,
                    header::HeaderInteraction::OpenDatasetRequested(path) => {
                        PanelInteraction::OpenDatasetRequested(path)
                    }
                });
            }
        });

        // Tag bar strip: height is always reserved so showing the bar never moves content.
        // Visibility flips are immediate, so there is no fade.
        let opacity = if state.scroll.tag_bar_visible() { 1.0 } else { 0.0 };
        egui::TopBottomPanel::top("tag_bar")
            .exact_height(state.config.tag_bar_height)
            .show(ctx, |ui| {
                let bar = TagBar::new(state.outlet.sections(), state.scroll.active_section());
                if let Some(tag_bar::TagBarInteraction::ChipTapped(id)) =
                    tag_bar::render_tag_bar(ui, &bar, opacity, &palette)
                {
                    interaction = Some(PanelInteraction::TagTapped(id));
                }
            });

        // Status bar at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let page_frame = egui::Frame::default().fill(palette.page_background);
        let mut header_offsets = HeaderOffsetMap::new();
        egui::CentralPanel::default()
            .frame(page_frame)
            .show(ctx, |ui| {
                let page = outlet_page::render_outlet_page(ui, state, &palette, now);
                header_offsets = page.header_offsets;
                if let Some(CellAction::AddToCart) = page.action {
                    interaction = Some(PanelInteraction::AddToCart);
                }
            });

        PanelOutput {
            interaction,
            header_offsets,
        }
    }
}
