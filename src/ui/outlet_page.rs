//! Outlet page UI rendering
//!
//! The vertically scrolling page: outlet header, one section per entry with a sticky
//! header, and a tail spacer so the last section can reach the top. Every frame it
//! measures where each section header sits relative to the viewport top.

use crate::app::AppState;
use crate::presentation::Palette;
use crate::rendering::cell_painter::paint_cell;
use crate::rendering::header_painter::{paint_section_header, SECTION_HEADER_HEIGHT};
use crate::ui::outlet_header::render_outlet_header;
use eframe::egui;
use routlet::cells::{self, Axis, CellAction, RenderedSection};
use routlet::coordination::sticky_headers;
use routlet::{HeaderOffsetMap, SectionsState, OUTLET_SCROLL_ID};

const CELL_SPACING: f32 = 8.0;
const SECTION_GAP: f32 = 16.0;

/// What one frame of the page produced.
pub struct PageOutput {
    /// Header offsets measured this layout pass
    pub header_offsets: HeaderOffsetMap,
    /// Action triggered from a cell, if any
    pub action: Option<CellAction>,
}

/// Renders the outlet page and measures its section headers.
pub fn render_outlet_page(
    ui: &mut egui::Ui,
    state: &mut AppState,
    palette: &Palette,
    now: f64,
) -> PageOutput {
    let mut area = egui::ScrollArea::vertical()
        .id_salt(OUTLET_SCROLL_ID)
        .auto_shrink([false, false]);
    if let Some(offset) = state.page.animated_offset(now) {
        area = area.vertical_scroll_offset(offset);
        ui.ctx().request_repaint();
    }

    let sections = state.outlet.sections();
    let registry = &state.registry;
    let page = &mut state.page;
    let load_state = state.outlet.state();
    let tail_overscroll = state.config.tail_overscroll;

    let mut header_offsets = HeaderOffsetMap::new();
    let mut action = None;

    let output = area.show(ui, |ui| {
        let viewport_top = ui.clip_rect().top();
        let content_top = ui.cursor().top();
        ui.spacing_mut().item_spacing.y = 0.0;

        render_outlet_header(ui, palette);

        match load_state {
            SectionsState::Loading => {
                ui.vertical_centered(|ui| ui.spinner());
            }
            SectionsState::Failed(err) => {
                ui.vertical_centered(|ui| {
                    ui.colored_label(egui::Color32::RED, format!("Could not load menu: {}", err));
                });
            }
            SectionsState::Idle | SectionsState::Loaded(_) => {}
        }

        // Pinned headers are painted after all content so they stay on top.
        let mut pinned = Vec::new();

        for section in sections {
            let (header_rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), SECTION_HEADER_HEIGHT),
                egui::Sense::hover(),
            );
            paint_section_header(ui.painter(), header_rect, &section.header_title, palette);
            page.anchors_mut().record(section.id, header_rect.top() - content_top);

            let rendered = cells::render(section, registry);
            if let Some(cell_action) = paint_section_body(ui, &rendered, palette) {
                action = Some(cell_action);
            }
            ui.add_space(SECTION_GAP);

            let natural_top = header_rect.top() - viewport_top;
            let section_bottom = ui.cursor().top() - viewport_top;
            let offset = sticky_headers::header_offset(
                natural_top,
                section_bottom,
                SECTION_HEADER_HEIGHT,
                section.is_sticky,
            );
            header_offsets.report(section.id, offset);

            if sticky_headers::is_pinned(
                natural_top,
                section_bottom,
                SECTION_HEADER_HEIGHT,
                section.is_sticky,
            ) {
                let rect = egui::Rect::from_min_size(
                    egui::pos2(header_rect.left(), viewport_top + offset),
                    header_rect.size(),
                );
                pinned.push((rect, section.header_title.as_str()));
            }
        }

        ui.add_space(tail_overscroll);

        for (rect, title) in pinned {
            paint_section_header(ui.painter(), rect, title, palette);
        }
    });

    page.anchors_mut()
        .set_max_scroll(output.content_size.y - output.inner_rect.height());
    page.set_scroll_offset(output.state.offset.y);

    PageOutput {
        header_offsets,
        action,
    }
}

/// Paints the cells of one section along its axis.
fn paint_section_body(
    ui: &mut egui::Ui,
    rendered: &RenderedSection,
    palette: &Palette,
) -> Option<CellAction> {
    let mut action = None;
    match rendered.axis {
        Axis::Vertical => {
            ui.add_space(CELL_SPACING);
            for placed in rendered.visible_cells() {
                egui::Frame::default()
                    .inner_margin(egui::Margin::symmetric(16, 0))
                    .show(ui, |ui| {
                        if let Some(cell_action) = paint_cell(ui, placed, palette) {
                            action = Some(cell_action);
                        }
                    });
                ui.add_space(CELL_SPACING);
            }
        }
        Axis::Horizontal => {
            ui.add_space(CELL_SPACING);
            egui::ScrollArea::horizontal()
                .id_salt(("carousel", rendered.section_id))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 12.0;
                        ui.add_space(16.0);
                        for placed in rendered.visible_cells() {
                            if let Some(cell_action) = paint_cell(ui, placed, palette) {
                                action = Some(cell_action);
                            }
                        }
                        ui.add_space(16.0);
                    });
                });
        }
    }
    action
}
