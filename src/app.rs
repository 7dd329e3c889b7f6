use std::sync::mpsc;

use eframe::egui;

use crate::data::model::TemperatureDataset;
use crate::data::remote::{fetch_dataset, DATA_URL};
use crate::state::AppState;
use crate::ui::{heatmap, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HeatGridApp {
    pub state: AppState,
    /// Channel carrying the startup fetch result; dropped once consumed.
    fetch: Option<mpsc::Receiver<anyhow::Result<TemperatureDataset>>>,
}

impl HeatGridApp {
    /// Create the app and kick off the single startup fetch.
    pub fn new(ctx: &egui::Context) -> Self {
        HeatGridApp {
            state: AppState {
                loading: true,
                ..AppState::default()
            },
            fetch: Some(spawn_fetch(DATA_URL.to_string(), ctx.clone())),
        }
    }

    /// Poll the fetch channel once per frame until the result arrives.
    fn poll_fetch(&mut self) {
        let Some(rx) = &self.fetch else { return };
        match rx.try_recv() {
            Ok(Ok(dataset)) => {
                log::info!(
                    "Fetched {} monthly readings (base temperature {:.2} °C)",
                    dataset.len(),
                    dataset.base_temperature
                );
                self.state.set_dataset(dataset);
                self.fetch = None;
            }
            Ok(Err(e)) => {
                log::error!("Failed to fetch dataset: {e:#}");
                self.state.set_error(format!("Error: {e:#}"));
                self.fetch = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.state
                    .set_error("Error: fetch worker exited unexpectedly".to_string());
                self.fetch = None;
            }
        }
    }
}

/// Run the blocking GET on a worker thread and wake the UI when it finishes.
fn spawn_fetch(
    url: String,
    ctx: egui::Context,
) -> mpsc::Receiver<anyhow::Result<TemperatureDataset>> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let result = fetch_dataset(&url);
        // A dropped receiver means the app already closed.
        let _ = tx.send(result);
        ctx.request_repaint();
    });
    rx
}

impl eframe::App for HeatGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();

        // ---- Top panel: menu bar + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: heat map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            heatmap::heatmap_panel(ui, &self.state);
        });
    }
}
