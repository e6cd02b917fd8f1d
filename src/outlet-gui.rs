//! Outlet Page Viewer GUI Application
//!
//! Interactive outlet page built with egui:
//! - Sticky section headers and a tag bar that appears once the outlet header
//!   scrolls away
//! - Tapping a tag scrolls to its section
//! - Asynchronous section loading from the demo fixture or a JSON dataset
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Visual styling (separated from domain logic)
//! - `ui/` - UI panel rendering
//! - `rendering/` - Low-level painting of cells and headers
//! - `state/` - Host-side scroll state

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context as _;
use clap::Parser;
use eframe::egui;
use routlet::OutletConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod presentation;
mod rendering;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "outlet-gui")]
#[command(about = "Outlet page with sticky section headers and a tag bar", long_about = None)]
struct Args {
    /// Config file (overrides OUTLET_CONFIG and the default location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON dataset to load instead of the demo outlet
    dataset: Option<PathBuf>,
}

/// Main application entry point that initializes and launches the outlet viewer GUI.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = OutletConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    let [width, height] = config.window_size;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_title("Outlet"),
        ..Default::default()
    };

    eframe::run_native(
        "Outlet",
        options,
        Box::new(move |cc| Ok(Box::new(OutletApp::new(cc, config, args.dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the outlet viewer: {}", e))
}

/// The outlet viewer application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles loading, header measurements and taps
/// - `PanelManager` handles UI panel layout and rendering
struct OutletApp {
    /// Centralized application state
    state: AppState,
    /// Whether the first frame still has to start loading
    pending_initial_load: bool,
    /// Dataset given on the command line, loaded instead of the demo
    initial_dataset: Option<PathBuf>,
}

impl OutletApp {
    fn new(cc: &eframe::CreationContext, config: OutletConfig, initial_dataset: Option<PathBuf>) -> Self {
        let mut state = AppState::new(config);

        // Visibility flips must show up without waiting for the next input event
        let ctx = cc.egui_ctx.clone();
        state.scroll.subscribe(move |change| {
            tracing::trace!(?change, "visibility changed");
            ctx.request_repaint();
        });

        Self {
            state,
            pending_initial_load: true,
            initial_dataset,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::ReloadRequested => {
                ApplicationCoordinator::load_outlet(&mut self.state, ctx);
            }
            PanelInteraction::OpenDatasetRequested(path) => {
                ApplicationCoordinator::open_dataset(&mut self.state, path, ctx);
            }
            PanelInteraction::TagTapped(id) => {
                let now = ctx.input(|i| i.time);
                ApplicationCoordinator::handle_tag_tap(&mut self.state, id, now);
                ctx.request_repaint();
            }
            PanelInteraction::AddToCart => {
                ApplicationCoordinator::handle_add_to_cart(&mut self.state);
            }
        }
    }
}

impl eframe::App for OutletApp {
    /// Main update loop:
    /// 1. Start the initial load on the first frame
    /// 2. Apply a finished load
    /// 3. Render all panels via PanelManager
    /// 4. Feed the measured header offsets to the scroll coordinator
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.pending_initial_load {
            self.pending_initial_load = false;
            match self.initial_dataset.take() {
                Some(path) => ApplicationCoordinator::open_dataset(&mut self.state, path, ctx),
                None => ApplicationCoordinator::load_outlet(&mut self.state, ctx),
            }
        }

        ApplicationCoordinator::check_loading_completion(&mut self.state);

        let output = PanelManager::render_all_panels(ctx, &mut self.state);
        ApplicationCoordinator::apply_header_offsets(&mut self.state, &output.header_offsets);

        if let Some(interaction) = output.interaction {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_accept_config_in_both_forms() {
        let args = Args::try_parse_from(["outlet-gui", "--config=cfg.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));

        let args = Args::try_parse_from(["outlet-gui", "--config", "cfg.json", "menu.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(args.dataset, Some(PathBuf::from("menu.json")));
    }

    #[test]
    fn test_args_default_to_demo_outlet() {
        let args = Args::try_parse_from(["outlet-gui"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.dataset.is_none());
    }

    #[test]
    fn test_args_reject_unknown_flags() {
        assert!(Args::try_parse_from(["outlet-gui", "--verbose"]).is_err());
    }
}
