use std::path::Path;

use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{panels, plot};

/// Loaded automatically at startup when present.
const DEFAULT_DATA_PATH: &str = "data/students.csv";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GradeGaugeApp {
    pub state: AppState,
}

impl Default for GradeGaugeApp {
    fn default() -> Self {
        let mut state = AppState::default();
        let default_path = Path::new(DEFAULT_DATA_PATH);
        if default_path.exists() {
            state.import_file(default_path);
        }
        Self { state }
    }
}

impl eframe::App for GradeGaugeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_tab {
            Tab::Data => panels::data_table(ui, &self.state),
            Tab::Dashboard => plot::dashboard(ui, &self.state),
            Tab::Predict => panels::predict_panel(ui, &mut self.state),
        });
    }
}
