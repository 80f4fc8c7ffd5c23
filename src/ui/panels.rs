use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::model::SortColumn;
use crate::state::{AppState, CentralTab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.  Any control change triggers a full
/// pipeline recomputation before the frame ends.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the selector domains so we can mutate state inside the closures.
    let regions = dataset.regions.clone();
    let countries = dataset.countries.clone();
    let (min_bound, max_bound) = dataset.confirmed_bounds;

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- WHO region selector ----
            ui.strong("WHO Region");
            changed |= option_combo(ui, "region_filter", &mut state.filters.region, &regions);
            ui.add_space(8.0);

            // ---- Country selector ----
            ui.strong("Country");
            changed |= option_combo(ui, "country_filter", &mut state.filters.country, &countries);
            ui.add_space(8.0);

            // ---- Confirmed-cases range ----
            ui.strong("Confirmed Cases Range");
            let (mut lo, mut hi) = state.filters.case_range;
            changed |= ui
                .add(Slider::new(&mut lo, min_bound..=max_bound).text("min"))
                .changed();
            changed |= ui
                .add(Slider::new(&mut hi, min_bound..=max_bound).text("max"))
                .changed();
            // min > max is allowed to pass through: the filter engine treats
            // an inverted range as matching nothing.
            state.filters.case_range = (lo, hi);
            ui.add_space(8.0);

            // ---- Sort column ----
            ui.strong("Sort By");
            egui::ComboBox::from_id_salt("sort_by")
                .selected_text(state.filters.sort_by.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    for col in SortColumn::ALL {
                        if ui
                            .selectable_value(&mut state.filters.sort_by, col, col.to_string())
                            .clicked()
                        {
                            changed = true;
                        }
                    }
                });
            ui.add_space(12.0);

            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
        });

    if changed {
        state.recompute();
    }
}

/// A combo box over `Some(value)` choices plus a leading "All" entry mapped
/// to `None`.  Returns whether the selection changed.
fn option_combo(
    ui: &mut Ui,
    id: &str,
    selection: &mut Option<String>,
    choices: &[String],
) -> bool {
    let mut changed = false;
    let selected_text = selection.clone().unwrap_or_else(|| "All".to_string());

    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .width(ui.available_width() * 0.9)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(selection.is_none(), "All").clicked() {
                if selection.is_some() {
                    *selection = None;
                    changed = true;
                }
            }
            for choice in choices {
                let is_selected = selection.as_deref() == Some(choice.as_str());
                if ui.selectable_label(is_selected, choice).clicked() && !is_selected {
                    *selection = Some(choice.clone());
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.tab, CentralTab::Charts, "Charts");
        ui.selectable_value(&mut state.tab, CentralTab::Table, "Table");

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} countries loaded, {} match filters",
                ds.len(),
                state.dashboard.view.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open country statistics")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} countries across {} WHO regions",
                    dataset.len(),
                    dataset.regions.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                // A failed load keeps the previous dataset intact.
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
