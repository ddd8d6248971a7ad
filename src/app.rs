use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

/// Dataset loaded at startup; File → Open… can replace it at runtime.
pub const DEFAULT_DATA_PATH: &str = "data/turnover.csv";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TenureScopeApp {
    pub state: AppState,
}

impl TenureScopeApp {
    /// Build the app and load the default dataset once.
    pub fn new() -> Self {
        let mut state = AppState::default();
        state.load_path(Path::new(DEFAULT_DATA_PATH));
        Self { state }
    }
}

impl eframe::App for TenureScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar, shape readout, status line ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: curve controls ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: preview, plot, probabilities ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::central_view(ui, &self.state);
        });
    }
}
