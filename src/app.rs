use eframe::egui;

use crate::state::{AppState, CentralTab};
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PandashApp {
    pub state: AppState,
}

impl eframe::App for PandashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar, tabs, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs + charts, or the filtered table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Open a country statistics file  (File → Open…)");
                });
                return;
            }

            match self.state.tab {
                CentralTab::Charts => {
                    charts::metric_tiles(ui, &self.state);
                    ui.separator();
                    charts::chart_grid(ui, &self.state);
                }
                CentralTab::Table => {
                    table::filtered_table(ui, &self.state);
                }
            }
        });
    }
}
