use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::state::AppState;

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

        if state.loading {
            ui.spinner();
            ui.label("Fetching global temperature data…");
        }

        if let Some(ds) = &state.dataset {
            let years = ds.years();
            if let (Some(first), Some(last)) = (years.first(), years.last()) {
                ui.label(format!(
                    "{} monthly readings, {first}–{last}, base {:.2} °C",
                    ds.len(),
                    ds.base_temperature
                ));
            } else {
                ui.label("Dataset contains no monthly readings");
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open temperature dataset")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} monthly readings from {}",
                    dataset.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.set_error(format!("Error: {e:#}"));
            }
        }
    }
}
