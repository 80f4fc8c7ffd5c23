use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Filtered-data table (central panel, "Table" tab)
// ---------------------------------------------------------------------------

const HEADERS: [&str; 8] = [
    "Country/Region",
    "WHO Region",
    "Confirmed",
    "Deaths",
    "Recovered",
    "Active",
    "Recovered / 100 Cases",
    "Deaths / 100 Cases",
];

/// Render the filtered, sorted view as a scrollable table.
pub fn filtered_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    let view = &state.dashboard.view;

    if view.is_empty() {
        ui.label("No countries match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(120.0))
        .columns(Column::auto().at_least(80.0), 6)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, view.len(), |mut row| {
                let rec = &dataset.records[view[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.country);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.region);
                });
                for value in [rec.confirmed, rec.deaths, rec.recovered, rec.active] {
                    row.col(|ui: &mut Ui| {
                        ui.label(value.to_string());
                    });
                }
                for rate in [rec.recovered_per_100, rec.deaths_per_100] {
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{rate:.2}"));
                    });
                }
            });
        });
}
