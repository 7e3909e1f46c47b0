use eframe::egui;

use crate::data::model::Table;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExplorerApp {
    pub state: AppState<'static>,
}

impl ExplorerApp {
    pub fn new(table: &'static Table) -> Self {
        Self {
            state: AppState::new(table),
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and metrics ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: selections ----
        egui::SidePanel::left("selection_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table, trend, comparison ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(ui, &self.state);
        });
    }
}
